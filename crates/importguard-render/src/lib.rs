//! Rendering utilities for CI surfaces (Markdown, GitHub annotations, terminal summary).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod summary;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableGroup, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
pub use summary::render_summary;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::*;

    pub fn sample_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                RenderableFinding {
                    severity: RenderableSeverity::Error,
                    check_id: Some("deps.undeclared".to_string()),
                    code: "undeclared_import".to_string(),
                    message: "'numpy' is imported but not declared as a dependency".to_string(),
                    location: Some(RenderableLocation {
                        path: "my_file.py".to_string(),
                        line: Some(3),
                    }),
                    help: Some("Declare it.".to_string()),
                    url: None,
                },
                RenderableFinding {
                    severity: RenderableSeverity::Warning,
                    check_id: Some("deps.unused".to_string()),
                    code: "unused_dependency".to_string(),
                    message: "'scipy' is declared as a dependency but never imported"
                        .to_string(),
                    location: Some(RenderableLocation {
                        path: "requirements.txt".to_string(),
                        line: None,
                    }),
                    help: None,
                    url: None,
                },
            ],
            data: RenderableData {
                findings_emitted: 2,
                findings_total: 2,
                truncated_reason: None,
            },
            undeclared: vec![RenderableGroup {
                name: "numpy".to_string(),
                locations: vec![
                    RenderableLocation {
                        path: "my_file.py".to_string(),
                        line: Some(3),
                    },
                    RenderableLocation {
                        path: "<stdin>".to_string(),
                        line: None,
                    },
                ],
            }],
            unused: vec![RenderableGroup {
                name: "scipy".to_string(),
                locations: vec![RenderableLocation {
                    path: "requirements.txt".to_string(),
                    line: None,
                }],
            }],
        }
    }
}
