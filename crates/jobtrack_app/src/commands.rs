use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use jobtrack_core::{ApplicationId, Draft, Msg, StatusFilter};
use jobtrack_storage::StorageSlot;

use crate::cli::Command;
use crate::render;
use crate::session::Session;

/// Runs one CLI command against `session`. `input` answers the deletion prompt.
pub fn execute<S: StorageSlot>(
    session: &mut Session<S>,
    command: Command,
    now_ms: impl Fn() -> u64,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Add {
            company,
            title,
            date,
            link,
            notes,
        } => {
            session.dispatch(Msg::ApplicationSubmitted {
                draft: Draft {
                    company,
                    title,
                    date,
                    link,
                    notes,
                },
                submitted_at_ms: now_ms(),
            });
            if let Some(err) = session.state().last_error() {
                bail!("application not added: {err}");
            }
            let view = session.view();
            if let Some(row) = view.rows.first() {
                writeln!(out, "Added {}: {} at {}", row.id, row.title, row.company)?;
            }
        }
        Command::Status { id, status } => {
            let id = ApplicationId::new(id);
            if session.state().store().get(&id).is_none() {
                writeln!(out, "No application with id {id}.")?;
                return Ok(());
            }
            session.dispatch(Msg::StatusChanged {
                id: id.clone(),
                status,
            });
            writeln!(out, "{id} is now {status}.")?;
        }
        Command::Remove { id, yes } => {
            let id = ApplicationId::new(id);
            session.dispatch(Msg::DeleteRequested { id: id.clone() });
            let Some(candidate) = session.view().pending_deletion else {
                return Ok(());
            };
            if candidate.label.is_empty() {
                session.dispatch(Msg::DeleteCancelled);
                writeln!(out, "No application with id {id}.")?;
                return Ok(());
            }

            if yes || confirm(input, out, &candidate.label)? {
                session.dispatch(Msg::DeleteConfirmed);
                writeln!(out, "Deleted {}.", candidate.label)?;
            } else {
                session.dispatch(Msg::DeleteCancelled);
                writeln!(out, "Kept {}.", candidate.label)?;
            }
        }
        Command::List { status } => {
            session.dispatch(Msg::FilterChanged(status));
            render::render_list(out, &session.view())?;
        }
        Command::Show { id } => {
            let id = ApplicationId::new(id);
            session.dispatch(Msg::FilterChanged(StatusFilter::All));
            let view = session.view();
            match view.rows.iter().find(|row| row.id == id) {
                Some(row) => render::render_detail(out, row)?,
                None => writeln!(out, "No application with id {id}.")?,
            }
        }
        Command::Summary => render::render_summary(out, &session.view())?,
    }
    Ok(())
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<bool> {
    write!(out, "Delete {label}? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use jobtrack_core::{Status, StatusFilter};
    use jobtrack_storage::{MemorySlot, PersistenceAdapter};
    use pretty_assertions::assert_eq;

    use super::execute;
    use crate::cli::Command;
    use crate::session::Session;

    const NOW: u64 = 1_704_412_800_000;

    fn run(session: &mut Session<MemorySlot>, command: Command, answer: &str) -> String {
        let mut input = answer.as_bytes();
        let mut out = Vec::new();
        execute(session, command, || NOW, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add(company: &str) -> Command {
        Command::Add {
            company: company.to_string(),
            title: "Engineer".to_string(),
            date: "2024-01-05".to_string(),
            link: String::new(),
            notes: String::new(),
        }
    }

    fn session() -> (Session<MemorySlot>, MemorySlot) {
        let slot = MemorySlot::new();
        (Session::start(PersistenceAdapter::new(slot.clone())), slot)
    }

    #[test]
    fn add_reports_new_id() {
        let (mut session, slot) = session();
        let out = run(&mut session, add("Acme"), "");
        assert_eq!(out, format!("Added {NOW}: Engineer at Acme\n"));
        assert!(slot.value().unwrap().contains("\"Acme\""));
    }

    #[test]
    fn add_with_blank_company_fails() {
        let (mut session, slot) = session();
        let mut out = Vec::new();
        let result = execute(&mut session, add("  "), || NOW, &mut "".as_bytes(), &mut out);
        assert!(result.is_err());
        assert!(session.state().store().is_empty());
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn remove_prompts_and_respects_answer() {
        let (mut session, _slot) = session();
        run(&mut session, add("Acme"), "");
        let id = NOW.to_string();

        let out = run(
            &mut session,
            Command::Remove {
                id: id.clone(),
                yes: false,
            },
            "n\n",
        );
        assert_eq!(out, "Delete Engineer at Acme? [y/N] Kept Engineer at Acme.\n");
        assert_eq!(session.state().store().len(), 1);

        let out = run(&mut session, Command::Remove { id, yes: false }, "Y\n");
        assert!(out.ends_with("Deleted Engineer at Acme.\n"));
        assert!(session.state().store().is_empty());
        assert!(session.state().deletion().pending().is_none());
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let (mut session, _slot) = session();
        run(&mut session, add("Acme"), "");
        let out = run(
            &mut session,
            Command::Remove {
                id: "nope".to_string(),
                yes: true,
            },
            "",
        );
        assert_eq!(out, "No application with id nope.\n");
        assert_eq!(session.state().store().len(), 1);
    }

    #[test]
    fn list_applies_filter() {
        let (mut session, _slot) = session();
        run(&mut session, add("Acme"), "");
        run(&mut session, add("Globex"), "");
        run(
            &mut session,
            Command::Status {
                id: NOW.to_string(),
                status: Status::Offer,
            },
            "",
        );

        let out = run(
            &mut session,
            Command::List {
                status: StatusFilter::Only(Status::Offer),
            },
            "",
        );
        assert!(out.contains("Engineer at Acme"));
        assert!(!out.contains("Globex"));
        assert!(out.ends_with("Showing 1 of 2 (Offer).\n"));
    }

    #[test]
    fn show_renders_optional_fields() {
        let (mut session, _slot) = session();
        let command = Command::Add {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            date: "2024-01-05".to_string(),
            link: "https://acme.example/jobs/1".to_string(),
            notes: String::new(),
        };
        run(&mut session, command, "");

        let out = run(&mut session, Command::Show { id: NOW.to_string() }, "");
        assert!(out.contains("Applied: Jan 5, 2024\n"));
        assert!(out.contains("Link:    https://acme.example/jobs/1\n"));
        assert!(!out.contains("Notes:"));

        let out = run(&mut session, Command::Show { id: "0".to_string() }, "");
        assert_eq!(out, "No application with id 0.\n");
    }

    #[test]
    fn summary_counts_every_status() {
        let (mut session, _slot) = session();
        run(&mut session, add("Acme"), "");
        let out = run(&mut session, Command::Summary, "");
        assert_eq!(
            out,
            "Applied       1\nInterviewing  0\nOffer         0\nRejected      0\nTotal         1\n"
        );
    }
}
