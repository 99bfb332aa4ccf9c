use color_eyre::Report;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io::Write;

use crate::rope::{NodeRecord, Role};

/// Writes a [`Rope::dump`](crate::Rope::dump) snapshot as an indented tree.
pub struct DumpPrinter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> DumpPrinter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, records: &[NodeRecord]) -> Result<(), Report> {
        for record in records {
            let indent = "  ".repeat(record.depth);
            let role = match record.role {
                Role::Root => "root",
                Role::Left => "L",
                Role::Right => "R",
            };
            let stats = format!(
                "{} w={} h={} len={} nl={}",
                record.id, record.weight, record.height, record.total_len, record.newlines
            );

            queue!(self.out, style::Print(indent))?;
            if self.color {
                queue!(
                    self.out,
                    style::Print(role.bold()),
                    style::Print(" "),
                    style::Print(stats.dark_grey())
                )?;
            } else {
                queue!(self.out, style::Print(role), style::Print(" "), style::Print(stats))?;
            }

            if let Some(preview) = &record.preview {
                let preview = format!(" {preview:?}");
                if self.color {
                    queue!(self.out, style::Print(preview.green()))?;
                } else {
                    queue!(self.out, style::Print(preview))?;
                }
            }
            queue!(self.out, style::Print("\n"))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rope;

    #[test]
    fn renders_one_line_per_node() {
        let rope: Rope = ["ab\n", "cd"].into_iter().collect();
        let mut printer = DumpPrinter::new(Vec::new(), false);

        printer.render(&rope.dump()).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "root #2 w=3 h=2 len=5 nl=1");
        assert_eq!(lines[1], r#"  L #0 w=3 h=1 len=3 nl=1 "ab\n""#);
        assert_eq!(lines[2], r#"  R #1 w=2 h=1 len=2 nl=0 "cd""#);
    }

    #[test]
    fn empty_rope_renders_nothing() {
        let mut printer = DumpPrinter::new(Vec::new(), true);
        printer.render(&Rope::new().dump()).unwrap();
        assert!(printer.into_inner().is_empty());
    }
}
