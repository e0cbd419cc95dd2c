//! Tree formatter
//!
//! Renders a `TreeNode` hierarchy with box-drawing connectors, followed by a
//! `N directories, M files` summary line.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::scan::TreeNode;

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix};

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string without colors.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(node, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.config.color_choice());
        self.write(node, &mut stdout)
    }

    pub fn write<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        self.write_name(out, node)?;
        writeln!(out)?;
        self.write_children(out, node, "")?;

        let (dir_count, file_count) = node.counts();
        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    fn write_children<W: WriteColor>(
        &self,
        out: &mut W,
        node: &TreeNode,
        prefix: &str,
    ) -> io::Result<()> {
        if let TreeNode::Dir {
            error: Some(message),
            ..
        } = node
        {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "{}{}[error reading directory: {}]", prefix, connector(true), message)?;
            out.reset()?;
            writeln!(out)?;
            return Ok(());
        }

        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            write!(out, "{}{}", prefix, connector(is_last))?;
            self.write_name(out, child)?;
            writeln!(out)?;
            if child.is_dir() {
                self.write_children(out, child, &continuation_prefix(prefix, is_last))?;
            }
        }
        Ok(())
    }

    fn write_name<W: WriteColor>(&self, out: &mut W, node: &TreeNode) -> io::Result<()> {
        if node.is_dir() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(out, "{}", node.name())?;
        out.reset()
    }
}
