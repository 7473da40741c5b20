//! Word document text extraction
//!
//! Pulls the raw paragraph text out of an uploaded .docx so the rubric
//! pipeline can work on plain text. Formatting, images and revision marks
//! are ignored; tables contribute their cell text row by row.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};

use crate::{ApiError, Result};

/// Extract the raw text content from a .docx byte buffer
///
/// # Errors
/// * `BadRequest` - If the buffer is not a readable Word document
pub fn extract_text(buffer: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(buffer).map_err(|e| {
        tracing::warn!(error = %e, "failed to parse Word document");
        ApiError::BadRequest("Failed to parse Word document".to_string())
    })?;

    let mut lines = Vec::new();

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                lines.push(paragraph_text(paragraph));
            }
            DocumentChild::Table(table) => {
                collect_table_text(table, &mut lines);
            }
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

/// Concatenate the text runs of one paragraph
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_paragraph_children(&paragraph.children, &mut text);
    text
}

fn collect_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => {
                collect_paragraph_children(&link.children, text);
            }
            _ => {}
        }
    }
}

fn collect_table_text(table: &docx_rs::Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        let mut cells = Vec::new();

        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            let mut cell_text = String::new();

            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    if !cell_text.is_empty() {
                        cell_text.push('\n');
                    }
                    cell_text.push_str(&paragraph_text(paragraph));
                }
            }

            cells.push(cell_text);
        }

        lines.push(cells.join("\t"));
    }
}
