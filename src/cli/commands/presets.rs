//! Preset listing command

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::selection::{Category, Preset};

#[derive(Serialize)]
struct PresetGroup {
    category: Category,
    presets: &'static [Preset],
}

pub async fn run(format: OutputFormat) -> Result<()> {
    let groups: Vec<PresetGroup> = Category::all()
        .iter()
        .map(|&category| PresetGroup {
            category,
            presets: category.presets(),
        })
        .collect();

    print_formatted(&groups, format, |groups| {
        groups
            .iter()
            .map(format_group)
            .collect::<Vec<_>>()
            .join("\n\n")
    });

    Ok(())
}

fn format_group(group: &PresetGroup) -> String {
    let mut lines = vec![format!("{}s:", group.category.name())];
    lines.extend(
        group
            .presets
            .iter()
            .map(|p| format!("  {:<18} {}", p.id, p.label)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_group_lists_ids_and_labels() {
        let group = PresetGroup {
            category: Category::Tone,
            presets: Category::Tone.presets(),
        };
        let text = format_group(&group);

        assert!(text.starts_with("Tones:"));
        assert!(text.contains("funny"));
        assert!(text.contains("Inspirational"));
    }
}
