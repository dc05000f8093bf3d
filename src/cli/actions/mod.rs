pub mod add;
pub mod list;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    List(list::Args),
    Add(add::Args),
}

impl Action {
    /// Execute the action, writing its report to stdout.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout();
        run::execute(self, &mut stdout).await
    }
}
