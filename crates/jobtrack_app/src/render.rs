use std::io::{self, Write};

use jobtrack_core::{AppViewModel, ApplicationRowView, Status};

pub fn render_list(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    if view.rows.is_empty() {
        return writeln!(out, "No applications ({}).", view.filter);
    }
    for row in &view.rows {
        writeln!(
            out,
            "{:<14} {:<12} {:<13} {} at {}",
            row.id, row.status, row.date_display, row.title, row.company
        )?;
    }
    writeln!(
        out,
        "Showing {} of {} ({}).",
        view.rows.len(),
        view.total_count,
        view.filter
    )
}

pub fn render_detail(out: &mut impl Write, row: &ApplicationRowView) -> io::Result<()> {
    writeln!(out, "Id:      {}", row.id)?;
    writeln!(out, "Company: {}", row.company)?;
    writeln!(out, "Title:   {}", row.title)?;
    writeln!(out, "Applied: {}", row.date_display)?;
    writeln!(out, "Status:  {}", row.status)?;
    if let Some(link) = &row.link {
        writeln!(out, "Link:    {link}")?;
    }
    if let Some(notes) = &row.notes {
        writeln!(out, "Notes:   {notes}")?;
    }
    Ok(())
}

pub fn render_summary(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    for status in Status::ALL {
        writeln!(out, "{:<13} {}", status.label(), view.counts.get(status))?;
    }
    writeln!(out, "{:<13} {}", "Total", view.total_count)
}
