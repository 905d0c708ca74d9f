use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::app::App;
use crate::clipboard::ClipboardWriter;
use crate::render;

/// What happened to the greeting on its way to the clipboard.
#[derive(Debug, PartialEq)]
enum CopyOutcome {
    Copied,
    NoClipboard,
    Failed(String),
}

fn copy_greeting(clipboard: Option<&dyn ClipboardWriter>, message: &str) -> CopyOutcome {
    let Some(clipboard) = clipboard else {
        return CopyOutcome::NoClipboard;
    };

    match clipboard.write_text(message) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "Could not copy greeting");
            CopyOutcome::Failed(e.to_string())
        }
    }
}

/// Compose a greeting for the matching record and copy it when a clipboard
/// is available.
pub fn run(app: &App, query: &str, clipboard: Option<&dyn ClipboardWriter>) -> Result<()> {
    let record = app.find(query)?;
    let message = app.engine.compose_greeting(&record, app.today);

    match copy_greeting(clipboard, &message) {
        CopyOutcome::Copied => {
            println!("{}", "Birthday wish ready!".green().bold());
            println!("{}", "The birthday message has been copied to your clipboard:".dimmed());
        }
        CopyOutcome::NoClipboard => {
            println!("{}", "Birthday wish ready!".green().bold());
        }
        CopyOutcome::Failed(reason) => {
            println!("{}", format!("Could not copy to clipboard: {reason}").red());
            println!("{}", "Copy the birthday message below by hand:".dimmed());
        }
    }
    println!();
    println!("  {message}");

    let contacts = render::contact_lines(&record);
    if !contacts.is_empty() {
        println!();
        for line in contacts {
            println!("{line}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::{FailingClipboard, RecordingClipboard};
    use crate::commands::testing::{app, date};
    use birthdays_core::BirthdayDraft;

    #[test]
    fn copies_greeting_to_clipboard() {
        let (_dir, app) = app();
        let mut draft = BirthdayDraft::new("Sam", date(1990, 6, 15));
        draft.phone = Some("555-0100".into());
        app.store.create(draft).unwrap();

        let clipboard = RecordingClipboard::default();
        run(&app, "sam", Some(&clipboard as &dyn ClipboardWriter)).unwrap();

        let written = clipboard.written.borrow();
        assert_eq!(written.len(), 1);
        assert!(written[0].contains("Happy 34th Birthday, Sam!"));
    }

    #[test]
    fn works_without_clipboard() {
        let (_dir, app) = app();
        app.store.create(BirthdayDraft::new("Sam", date(1990, 6, 15))).unwrap();
        run(&app, "sam", None).unwrap();
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let outcome = copy_greeting(Some(&FailingClipboard as &dyn ClipboardWriter), "Hi Sam");
        assert!(matches!(outcome, CopyOutcome::Failed(reason) if reason.contains("exited with")));

        let recording = RecordingClipboard::default();
        let outcome = copy_greeting(Some(&recording as &dyn ClipboardWriter), "Hi Sam");
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(copy_greeting(None, "Hi Sam"), CopyOutcome::NoClipboard);
    }

    #[test]
    fn wish_still_prints_when_copy_fails() {
        let (_dir, app) = app();
        app.store.create(BirthdayDraft::new("Sam", date(1990, 6, 15))).unwrap();
        run(&app, "sam", Some(&FailingClipboard as &dyn ClipboardWriter)).unwrap();
    }

    #[test]
    fn unknown_person_fails() {
        let (_dir, app) = app();
        let clipboard = RecordingClipboard::default();
        assert!(run(&app, "nobody", Some(&clipboard as &dyn ClipboardWriter)).is_err());
        assert!(clipboard.written.borrow().is_empty());
    }
}
