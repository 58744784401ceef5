mod batch_script;
mod shell_copy;

pub use batch_script::BatchScriptScheduler;
pub use shell_copy::ShellCopier;
