//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with `termimad` and MCP
//! clients can show it verbatim.

use std::fmt;

use super::datetime::{LocalDateTime, RelativeOffset};
use crate::{
    lifecycle::CountdownMetrics,
    models::{Candidate, CandidateList, ListSummary, Phase, Todo, TodoStatus, WheelDraw},
};

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Starts: {}", LocalDateTime(&self.start_at))?;
        writeln!(f, "- Ends: {}", LocalDateTime(&self.end_at))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl Todo {
    /// Compact form used inside collections.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Window**: {} to {}",
            LocalDateTime(&self.start_at),
            LocalDateTime(&self.end_at)
        )?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CountdownMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Done => write!(f, "{}", self.phase),
            Phase::Upcoming => write!(
                f,
                "{}: starts {}, ends {}",
                self.phase,
                RelativeOffset(self.starts_in),
                RelativeOffset(self.ends_in)
            ),
            Phase::Active => write!(
                f,
                "{}: started {}, ends {}",
                self.phase,
                RelativeOffset(self.starts_in),
                RelativeOffset(self.ends_in)
            ),
            Phase::Overdue => write!(
                f,
                "{}: ended {}",
                self.phase,
                RelativeOffset(self.ends_in)
            ),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} (ID: {}, weight: {})",
            self.label, self.id, self.weight
        )
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Candidates: {} (total weight: {})",
            self.candidates.len(),
            self.total_weight()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.candidates.is_empty() {
            writeln!(f, "\nNo candidates in this list.")?;
        } else {
            writeln!(f, "\n## Candidates")?;
            writeln!(f)?;
            for candidate in &self.candidates {
                write!(f, "{candidate}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.candidate_count == 1 {
            "candidate"
        } else {
            "candidates"
        };
        writeln!(
            f,
            "## {} (ID: {}) ({} {noun})",
            self.name, self.id, self.candidate_count
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Total weight**: {}", self.total_weight)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for WheelDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The wheel picked **{}** from '{}' (ID: {})",
            self.candidate.label, self.list_name, self.list_id
        )?;
        writeln!(f)?;
        writeln!(f, "- Candidate ID: {}", self.candidate.id)?;
        writeln!(f, "- Weight: {}", self.candidate.weight)?;
        writeln!(f, "- Chance: {:.1}%", self.probability * 100.0)
    }
}
