//! Demo catalog: every demo by name, grouped into sections, and the
//! runner that prints them with headings.

use std::fmt;
use std::io::{self, Write};

use colored::Colorize;
use serde::Deserialize;

use crate::error::{Result, TourError};
use crate::host::Host;
use crate::{flow_control, more_types};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    FlowControl,
    MoreTypes,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::FlowControl => "Flow control",
            Section::MoreTypes => "More types",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::FlowControl => f.write_str("flow_control"),
            Section::MoreTypes => f.write_str("more_types"),
        }
    }
}

pub type DemoFn = fn(&mut dyn Write, &Host) -> io::Result<()>;

#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub section: Section,
    pub run: DemoFn,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("section", &self.section)
            .finish()
    }
}

macro_rules! demo {
    ($section:ident, $name:literal, |$out:ident, $host:pat_param| $body:expr) => {
        Demo {
            name: $name,
            section: Section::$section,
            run: |$out, $host| $body,
        }
    };
}

/// All demos, in the order the sections run them.
pub fn catalog() -> Vec<Demo> {
    vec![
        demo!(FlowControl, "loops", |out, _| flow_control::loops(out)),
        demo!(FlowControl, "if_else", |out, _| flow_control::if_else(out)),
        demo!(FlowControl, "platform_switch", |out, host| {
            flow_control::platform_switch(out, &host.platform)
        }),
        demo!(FlowControl, "weekday_switch", |out, host| {
            flow_control::weekday_switch(out, host.today)
        }),
        demo!(FlowControl, "defer_stacking", |out, _| flow_control::defer_stacking(out)),
        demo!(MoreTypes, "pointers", |out, _| more_types::pointers(out).map(drop)),
        demo!(MoreTypes, "struct_printing", |out, _| more_types::struct_printing(out)),
        demo!(MoreTypes, "struct_equality", |out, _| more_types::struct_equality(out)),
        demo!(MoreTypes, "pointer_to_struct", |out, _| {
            more_types::pointer_to_struct(out).map(drop)
        }),
        demo!(MoreTypes, "struct_literals", |out, _| more_types::struct_literals(out)),
        demo!(MoreTypes, "array_basics", |out, _| more_types::array_basics(out)),
        demo!(MoreTypes, "slices_basics", |out, _| more_types::slices_basics(out)),
        demo!(MoreTypes, "slice_literals", |out, _| more_types::slice_literals(out)),
        demo!(MoreTypes, "slice_defaults", |out, _| more_types::slice_defaults(out)),
        demo!(MoreTypes, "nil_slices", |out, _| more_types::nil_slices(out)),
        demo!(MoreTypes, "making_slices", |out, _| more_types::making_slices(out)),
        demo!(MoreTypes, "appending_slices", |out, _| more_types::appending_slices(out)),
        demo!(MoreTypes, "range_slices", |out, _| more_types::range_slices(out)),
        demo!(MoreTypes, "maps", |out, _| more_types::maps(out)),
        demo!(MoreTypes, "mutating_maps", |out, _| more_types::mutating_maps(out).map(drop)),
        demo!(MoreTypes, "word_count", |out, _| more_types::word_count_check(out)),
        demo!(MoreTypes, "function_values", |out, _| more_types::function_values(out)),
        demo!(MoreTypes, "closures", |out, _| more_types::closures(out)),
        demo!(MoreTypes, "fibonacci", |out, _| more_types::fibonacci_demo(out)),
    ]
}

/// Picks the demos to run. `only` names a single demo and wins over the
/// section list; unknown names in `skip` or `only` are errors.
pub fn select<'a>(
    demos: &'a [Demo],
    sections: &[Section],
    skip: &[String],
    only: Option<&str>,
) -> Result<Vec<&'a Demo>> {
    for name in skip.iter().map(String::as_str).chain(only) {
        if !demos.iter().any(|d| d.name == name) {
            return Err(TourError::UnknownDemo(name.to_string()));
        }
    }

    if let Some(name) = only {
        return Ok(demos.iter().filter(|d| d.name == name).collect());
    }

    let picked = sections
        .iter()
        .flat_map(|&section| demos.iter().filter(move |d| d.section == section))
        .filter(|d| !skip.iter().any(|s| s == d.name))
        .collect();
    Ok(picked)
}

pub struct Runner<'h> {
    host: &'h Host,
    color: bool,
}

impl<'h> Runner<'h> {
    pub fn new(host: &'h Host, color: bool) -> Self {
        Runner { host, color }
    }

    fn heading(&self, text: &str) -> String {
        let line = format!("=== {} ===", text);
        if self.color {
            line.bold().cyan().to_string()
        } else {
            line
        }
    }

    fn subheading(&self, text: &str) -> String {
        let line = format!("--- {} ---", text);
        if self.color {
            line.dimmed().to_string()
        } else {
            line
        }
    }

    /// Runs the demos in order, printing a heading whenever the section
    /// changes and a subheading before each demo.
    pub fn run(&self, out: &mut dyn Write, demos: &[&Demo]) -> Result<()> {
        let mut current = None;
        for demo in demos {
            if current != Some(demo.section) {
                if current.is_some() {
                    writeln!(out)?;
                }
                writeln!(out, "{}", self.heading(demo.section.title()))?;
                current = Some(demo.section);
            }
            writeln!(out, "{}", self.subheading(demo.name))?;
            tracing::debug!(demo = demo.name, section = %demo.section, "running demo");
            (demo.run)(out, self.host)?;
        }
        Ok(())
    }
}
