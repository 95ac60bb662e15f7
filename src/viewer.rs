//! Interactive command loop and batched ticket display.
//!
//! The viewer reads single-line commands from an injected [`BufRead`] and
//! renders through an injected [`Write`], which keeps the whole interaction
//! loop testable against in-memory buffers.
//!
//! Errors returned by the API client are reported on the console and the
//! loop continues; only console I/O failures propagate out of [`Viewer::run`].

use std::io::{self, BufRead, Write};

use crate::display;
use crate::error::LensError;
use crate::models::Ticket;
use crate::zendesk_client::ZendeskClient;

/// Prompt shown between batches while paging through the ticket list.
const PAGER_PROMPT: &str = "\nEnter 'c' to display more tickets (if any), \
                            '<ticket-number>' for a detailed view of a ticket, \
                            or 'q' to go back to menu: ";

/// Interactive viewer over a ticket API client.
///
/// Owns the console streams for the duration of the session. One HTTP
/// request is in flight at a time; the loop blocks on each response
/// before prompting again.
pub struct Viewer<R, W> {
    client: ZendeskClient,
    input: R,
    output: W,
    batch_size: usize,
}

impl<R: BufRead, W: Write> Viewer<R, W> {
    /// Creates a viewer over the given client and console streams.
    ///
    /// `batch_size` controls how many summaries are shown per pagination
    /// step and must be at least 1 (enforced by [`Config`] validation).
    ///
    /// [`Config`]: crate::config::Config
    pub fn new(client: ZendeskClient, input: R, output: W, batch_size: usize) -> Self {
        Self {
            client,
            input,
            output,
            batch_size,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only for console I/O failures. API errors are
    /// printed and the loop continues.
    pub async fn run(&mut self) -> Result<(), LensError> {
        display::clear_screen(&mut self.output)?;
        display::banner(&mut self.output)?;
        writeln!(self.output, "Type 'menu' to view options or 'quit' to exit")?;

        loop {
            let Some(command) = self.prompt("\n\nCommand (type 'menu' for options): ")? else {
                // End of input behaves like "quit".
                return Ok(());
            };

            match command.as_str() {
                "menu" => display::menu(&mut self.output)?,
                "1" => self.show_single_ticket().await?,
                "2" => self.show_all_tickets().await?,
                "quit" => return Ok(()),
                _ => writeln!(
                    self.output,
                    "You have entered a wrong command! Type 'menu' to view valid commands."
                )?,
            }
        }
    }

    /// Handles command `1`: prompt for a ticket id, fetch it, render the
    /// detail view.
    async fn show_single_ticket(&mut self) -> Result<(), LensError> {
        let Some(raw_id) = self.prompt("Enter a ticket-ID (#): ")? else {
            return Ok(());
        };

        let ticket_id: u64 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.output, "Ticket-ID must be a number.")?;
                return Ok(());
            }
        };

        match self.client.get_ticket(ticket_id).await {
            Ok(ticket) => display::detail(&mut self.output, &ticket)?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    /// Handles command `2`: fetch the full collection and page through it.
    async fn show_all_tickets(&mut self) -> Result<(), LensError> {
        match self.client.list_tickets().await {
            Ok(tickets) => self.page_tickets(&tickets)?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    /// Pages through the fetched list in batches of `batch_size`.
    ///
    /// After each batch (including the final, possibly partial one) a
    /// sub-command is awaited:
    ///
    /// - a number: 1-based index into the *full* list, not the current
    ///   batch, so tickets from batches already shown stay reachable;
    ///   out of range is reported and the prompt repeats
    /// - `c`: next batch, or end of pagination when the list is exhausted
    /// - `q`: straight back to the main menu
    ///
    /// End of input ends pagination like `q`.
    fn page_tickets(&mut self, tickets: &[Ticket]) -> io::Result<()> {
        if tickets.is_empty() {
            writeln!(self.output, "There are no tickets to display.")?;
            return Ok(());
        }

        let total = tickets.len();
        let mut cursor = 0;

        loop {
            let batch_end = usize::min(cursor + self.batch_size, total);
            for ticket in &tickets[cursor..batch_end] {
                display::summary(&mut self.output, ticket)?;
            }
            cursor = batch_end;

            loop {
                let Some(command) = self.prompt(PAGER_PROMPT)? else {
                    return Ok(());
                };

                if let Ok(index) = command.parse::<usize>() {
                    if (1..=total).contains(&index) {
                        display::detail(&mut self.output, &tickets[index - 1])?;
                    } else {
                        writeln!(self.output, "Ticket with the given number does not exist.")?;
                    }
                } else if command == "q" {
                    return Ok(());
                } else if command == "c" {
                    break;
                } else {
                    writeln!(self.output, "Please enter a valid command!")?;
                }
            }

            if cursor >= total {
                return Ok(());
            }
        }
    }

    /// Writes a prompt and reads one line of input.
    ///
    /// Returns `None` at end of input. The line is trimmed and lowercased;
    /// every accepted command is case-insensitive and numeric input is
    /// unaffected.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Client pointed at a closed port; tests that never touch the network
    /// use it purely as a placeholder.
    fn offline_client() -> ZendeskClient {
        ZendeskClient::with_base_url("http://127.0.0.1:1", "test_user", "test_token").unwrap()
    }

    /// Tickets with ids offset from their list position, so tests can tell
    /// the two numbering schemes apart.
    fn make_tickets(n: usize) -> Vec<Ticket> {
        (1..=n)
            .map(|i| Ticket {
                id: 100 + i as u64,
                status: "open".to_string(),
                priority: Some("low".to_string()),
                assignee_id: Some(i as u64),
                subject: format!("Ticket {i}"),
                description: format!("Description {i}"),
            })
            .collect()
    }

    fn run_pager(tickets: &[Ticket], batch_size: usize, input: &str) -> String {
        let mut out = Vec::new();
        let mut viewer = Viewer::new(
            offline_client(),
            Cursor::new(input.to_string()),
            &mut out,
            batch_size,
        );
        viewer.page_tickets(tickets).unwrap();
        drop(viewer);
        String::from_utf8(out).unwrap()
    }

    async fn run_viewer(client: ZendeskClient, input: &str) -> String {
        let mut out = Vec::new();
        let mut viewer = Viewer::new(client, Cursor::new(input.to_string()), &mut out, 25);
        viewer.run().await.unwrap();
        drop(viewer);
        String::from_utf8(out).unwrap()
    }

    fn pager_prompt_count(output: &str) -> usize {
        output.matches("Enter 'c' to display more tickets").count()
    }

    #[test]
    fn test_pager_emits_ceil_n_over_b_batches() {
        let output = run_pager(&make_tickets(5), 2, "c\nc\nc\n");
        // 5 summaries across 3 batches, final batch partial.
        assert_eq!(output.matches(", Status: open, Subject: ").count(), 5);
        assert_eq!(pager_prompt_count(&output), 3);
    }

    #[test]
    fn test_pager_exact_multiple_has_no_extra_batch() {
        let output = run_pager(&make_tickets(4), 2, "c\nc\n");
        assert_eq!(output.matches(", Status: open, Subject: ").count(), 4);
        assert_eq!(pager_prompt_count(&output), 2);
    }

    #[test]
    fn test_pager_q_returns_to_menu_immediately() {
        let output = run_pager(&make_tickets(5), 2, "q\n");
        // Only the first batch was rendered.
        assert_eq!(output.matches(", Status: open, Subject: ").count(), 2);
        assert_eq!(pager_prompt_count(&output), 1);
    }

    #[test]
    fn test_pager_numeric_index_is_against_full_list() {
        // Index 4 points past the currently shown batch; it must still
        // resolve, and against list position rather than server id.
        let output = run_pager(&make_tickets(5), 2, "4\nq\n");
        assert!(output.contains("\nTicket-ID: 104\n"));
        assert!(output.contains("Subject: Ticket 4\n"));
    }

    #[test]
    fn test_pager_out_of_range_index_is_reported() {
        let output = run_pager(&make_tickets(5), 2, "6\n0\nq\n");
        assert_eq!(
            output
                .matches("Ticket with the given number does not exist.")
                .count(),
            2
        );
    }

    #[test]
    fn test_pager_invalid_subcommand_reprompts() {
        let output = run_pager(&make_tickets(3), 25, "x\nq\n");
        assert!(output.contains("Please enter a valid command!"));
        assert_eq!(pager_prompt_count(&output), 2);
    }

    #[test]
    fn test_pager_empty_list() {
        let output = run_pager(&[], 25, "");
        assert!(output.contains("There are no tickets to display."));
        assert_eq!(pager_prompt_count(&output), 0);
    }

    #[test]
    fn test_pager_eof_ends_pagination() {
        let output = run_pager(&make_tickets(5), 2, "");
        assert_eq!(output.matches(", Status: open, Subject: ").count(), 2);
    }

    #[tokio::test]
    async fn test_run_menu_and_quit() {
        let output = run_viewer(offline_client(), "menu\nquit\n").await;
        assert!(output.contains("Zendesk Ticket Viewer"));
        assert!(output.contains("Type 'menu' to view options or 'quit' to exit"));
        assert!(output.contains("-> Enter '1' for fetching a single ticket."));
    }

    #[tokio::test]
    async fn test_run_wrong_command_keeps_looping() {
        let output = run_viewer(offline_client(), "frobnicate\nquit\n").await;
        assert!(output
            .contains("You have entered a wrong command! Type 'menu' to view valid commands."));
        // The loop prompted again after the bad command.
        assert_eq!(
            output.matches("Command (type 'menu' for options): ").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_run_eof_terminates_cleanly() {
        let output = run_viewer(offline_client(), "").await;
        assert!(output.contains("Type 'menu' to view options or 'quit' to exit"));
    }

    #[tokio::test]
    async fn test_run_single_ticket_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickets/5.json"))
            .and(basic_auth("test_user/token", "test_token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "ticket": {
                        "id": 5,
                        "status": "open",
                        "priority": "high",
                        "assignee_id": 34,
                        "subject": "Printer on fire",
                        "description": "The printer in reception is on fire."
                    }
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ZendeskClient::with_base_url(server.uri(), "test_user", "test_token").unwrap();
        let output = run_viewer(client, "1\n5\nquit\n").await;

        assert!(output.contains(
            "\nTicket-ID: 5\n\
             Priority: high\n\
             Status: open\n\
             Assignee-ID: 34\n\
             Subject: Printer on fire\n\
             Description: The printer in reception is on fire.\n"
        ));
    }

    #[tokio::test]
    async fn test_run_single_ticket_rejects_non_numeric_id() {
        let output = run_viewer(offline_client(), "1\nabc\nquit\n").await;
        assert!(output.contains("Ticket-ID must be a number."));
    }

    #[tokio::test]
    async fn test_run_api_error_is_reported_and_loop_continues() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickets/99.json"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "RecordNotFound" })),
            )
            .mount(&server)
            .await;

        let client =
            ZendeskClient::with_base_url(server.uri(), "test_user", "test_token").unwrap();
        let output = run_viewer(client, "1\n99\nmenu\nquit\n").await;

        assert!(output.contains(
            "Looks like the resource you are trying to access does not exist.\nRecordNotFound"
        ));
        // The loop survived the error and rendered the menu afterwards.
        assert!(output.contains("-> Enter 'quit' to exit the software."));
    }

    #[tokio::test]
    async fn test_run_connectivity_error_is_reported() {
        let output = run_viewer(offline_client(), "2\nquit\n").await;
        assert!(output.contains("An error occurred while accessing the API."));
    }

    #[tokio::test]
    async fn test_run_all_tickets_end_to_end() {
        let server = MockServer::start().await;
        let tickets: Vec<serde_json::Value> = (1..=3)
            .map(|i| {
                serde_json::json!({
                    "id": i,
                    "status": "open",
                    "priority": "normal",
                    "assignee_id": null,
                    "subject": format!("Ticket {i}"),
                    "description": format!("Description {i}")
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "tickets": tickets })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            ZendeskClient::with_base_url(server.uri(), "test_user", "test_token").unwrap();
        let output = run_viewer(client, "2\nq\nquit\n").await;

        assert!(output.contains("\nTicket-ID: 1, Status: open, Subject: Ticket 1\n"));
        assert!(output.contains("\nTicket-ID: 3, Status: open, Subject: Ticket 3\n"));
    }
}
