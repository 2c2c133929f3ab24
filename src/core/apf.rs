//! Project file (.apf) handling
//!
//! A project file is a small XML document holding compiler settings:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Armemus_Project_File>
//!     <Compiler>
//!         <Directories/>
//!         <Symbols/>
//!         <Warnings>
//!             <Warning option="-W"/>
//!         </Warnings>
//!         <Optimization>
//!             <optimization option="-O0"/>
//!         </Optimization>
//!     </Compiler>
//! </Armemus_Project_File>
//! ```
//!
//! Writing produces exactly this layout (four-space indentation,
//! self-closing empty elements). Reading goes through `roxmltree`.

use serde::Serialize;

use crate::config::defaults::{DEFAULT_OPTIMIZATION, DEFAULT_WARNING, PROJECT_FILE_ROOT};
use crate::error::ApfError;

const INDENT: &str = "    ";

/// Compiler settings stored in a project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    /// `Warnings/Warning[option]` values
    pub warnings: Vec<String>,

    /// `Optimization/optimization[option]` values
    pub optimizations: Vec<String>,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            warnings: vec![DEFAULT_WARNING.to_string()],
            optimizations: vec![DEFAULT_OPTIMIZATION.to_string()],
        }
    }
}

impl ProjectFile {
    /// Render the project file as UTF-8 XML
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!("<{PROJECT_FILE_ROOT}>\n"));
        out.push_str(&format!("{INDENT}<Compiler>\n"));
        push_empty(&mut out, 2, "Directories");
        push_empty(&mut out, 2, "Symbols");
        push_options(&mut out, "Warnings", "Warning", &self.warnings);
        push_options(&mut out, "Optimization", "optimization", &self.optimizations);
        out.push_str(&format!("{INDENT}</Compiler>\n"));
        out.push_str(&format!("</{PROJECT_FILE_ROOT}>\n"));
        out
    }

    /// Parse a project file
    pub fn parse(content: &str) -> Result<Self, ApfError> {
        let doc = roxmltree::Document::parse(content)?;
        let root = doc.root_element();

        if root.tag_name().name() != PROJECT_FILE_ROOT {
            return Err(ApfError::WrongRoot {
                found: root.tag_name().name().to_string(),
                expected: PROJECT_FILE_ROOT.to_string(),
            });
        }

        let compiler = child_element(root, "Compiler").ok_or_else(|| ApfError::MissingElement {
            element: "Compiler".to_string(),
        })?;

        Ok(Self {
            warnings: collect_options(compiler, "Warnings", "Warning"),
            optimizations: collect_options(compiler, "Optimization", "optimization"),
        })
    }
}

fn child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn collect_options(compiler: roxmltree::Node, group: &str, item: &str) -> Vec<String> {
    child_element(compiler, group)
        .map(|g| {
            g.children()
                .filter(|n| n.is_element() && n.tag_name().name() == item)
                .filter_map(|n| n.attribute("option"))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn push_empty(out: &mut String, depth: usize, name: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("<{name}/>\n"));
}

fn push_options(out: &mut String, group: &str, item: &str, options: &[String]) {
    if options.is_empty() {
        push_empty(out, 2, group);
        return;
    }

    let outer = INDENT.repeat(2);
    let inner = INDENT.repeat(3);
    out.push_str(&format!("{outer}<{group}>\n"));
    for option in options {
        out.push_str(&format!(
            "{inner}<{item} option=\"{}\"/>\n",
            escape_attr(option)
        ));
    }
    out.push_str(&format!("{outer}</{group}>\n"));
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
