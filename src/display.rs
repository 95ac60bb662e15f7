//! Console rendering for menus and tickets.
//!
//! Every function writes into an injected [`Write`] sink instead of
//! printing directly, so the viewer can run over locked stdout in
//! production and over byte buffers in tests.

use std::io::{self, Write};

use crate::models::Ticket;

/// ANSI erase-display + cursor-home sequence.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Clears the console.
///
/// A single capability backed by the ANSI control sequence, which modern
/// terminals on all supported platforms understand.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{CLEAR_SEQUENCE}")?;
    out.flush()
}

/// Prints the startup banner.
pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Zendesk Ticket Viewer")?;
    writeln!(out)
}

/// Prints the menu of top-level commands.
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nPlease enter a command from below:")?;
    writeln!(out, "-> Enter '1' for fetching a single ticket.")?;
    writeln!(out, "-> Enter '2' for fetching all tickets.")?;
    writeln!(out, "-> Enter 'quit' to exit the software.")
}

/// Prints the one-line summary view of a ticket: id, status, subject.
pub fn summary(out: &mut impl Write, ticket: &Ticket) -> io::Result<()> {
    writeln!(
        out,
        "\nTicket-ID: {}, Status: {}, Subject: {}",
        ticket.id, ticket.status, ticket.subject
    )
}

/// Prints the detailed view of a ticket.
///
/// Six lines in fixed order: id, priority, status, assignee id, subject,
/// description.
pub fn detail(out: &mut impl Write, ticket: &Ticket) -> io::Result<()> {
    writeln!(out, "\nTicket-ID: {}", ticket.id)?;
    writeln!(out, "Priority: {}", ticket.display_priority())?;
    writeln!(out, "Status: {}", ticket.status)?;
    writeln!(out, "Assignee-ID: {}", ticket.display_assignee_id())?;
    writeln!(out, "Subject: {}", ticket.subject)?;
    writeln!(out, "Description: {}", ticket.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_ticket() -> Ticket {
        Ticket {
            id: 1,
            status: "closed".to_string(),
            priority: Some("high".to_string()),
            assignee_id: Some(34),
            subject: "Test ticket".to_string(),
            description: "This is a test description".to_string(),
        }
    }

    #[test]
    fn test_menu_lists_all_commands() {
        let rendered = render(menu);
        assert_eq!(
            rendered,
            "\nPlease enter a command from below:\n\
             -> Enter '1' for fetching a single ticket.\n\
             -> Enter '2' for fetching all tickets.\n\
             -> Enter 'quit' to exit the software.\n"
        );
    }

    #[test]
    fn test_summary_is_one_line() {
        let rendered = render(|out| summary(out, &sample_ticket()));
        assert_eq!(
            rendered,
            "\nTicket-ID: 1, Status: closed, Subject: Test ticket\n"
        );
    }

    #[test]
    fn test_detail_renders_six_fields_in_order() {
        let rendered = render(|out| detail(out, &sample_ticket()));
        assert_eq!(
            rendered,
            "\nTicket-ID: 1\n\
             Priority: high\n\
             Status: closed\n\
             Assignee-ID: 34\n\
             Subject: Test ticket\n\
             Description: This is a test description\n"
        );
    }

    #[test]
    fn test_detail_renders_placeholders_for_untriaged_ticket() {
        let mut ticket = sample_ticket();
        ticket.priority = None;
        ticket.assignee_id = None;
        let rendered = render(|out| detail(out, &ticket));
        assert!(rendered.contains("Priority: none\n"));
        assert!(rendered.contains("Assignee-ID: none\n"));
    }

    #[test]
    fn test_clear_screen_emits_ansi_sequence() {
        let rendered = render(clear_screen);
        assert_eq!(rendered, "\x1B[2J\x1B[1;1H");
    }
}
