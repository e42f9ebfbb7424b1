use std::io::Write;

use polysolve_core::Notifier;

/// Draws each message in a speech bubble on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct Say;

pub fn bubble(message: &str) -> String {
    let width = message.chars().count();
    let rule = |c: char| c.to_string().repeat(width + 2);
    [
        format!(" {}", rule('_')),
        format!("< {} >", message),
        format!(" {}", rule('-')),
        "        \\".to_string(),
        "         \\".to_string(),
    ].join("\n")
}

impl Notifier for Say {
    fn notify(&self, message: &str) {
        let _ = writeln!(std::io::stderr(), "{}", bubble(message));
    }
}
