//! Navigation Plans
//!
//! Clickable shortcuts expand into a short list of command lines. A later
//! step may name the directory it depends on; the shell only runs it once
//! the earlier steps have actually moved the session there.

use folio_vfs::VPath;

use crate::config::{FIND_MY, LIFE_DIR};

/// One command line of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub line: String,
    /// Directory the session must be in before this step runs
    pub expects: Option<VPath>,
}

impl PlanStep {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            expects: None,
        }
    }

    pub fn expecting(line: impl Into<String>, path: VPath) -> Self {
        Self {
            line: line.into(),
            expects: Some(path),
        }
    }
}

/// Ordered steps for one shortcut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPlan {
    steps: Vec<PlanStep>,
}

impl NavigationPlan {
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&mut self, step: PlanStep) {
        self.steps.push(step);
    }
}

impl FromIterator<PlanStep> for NavigationPlan {
    fn from_iter<I: IntoIterator<Item = PlanStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NavigationPlan {
    type Item = PlanStep;
    type IntoIter = std::vec::IntoIter<PlanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Build the plan for activating `name` while the session is at `cwd`
///
/// - `life`: `cd life`, then `ls` inside it
/// - `find_my`: climb to `~` if needed, then `cat find_my`
/// - anything else: enter `~/life` if needed, then `cat <name>`
pub fn plan_navigation(name: &str, cwd: &VPath) -> NavigationPlan {
    let life = VPath::root().join(LIFE_DIR);
    let mut plan = NavigationPlan::default();

    if name == LIFE_DIR {
        plan.push(PlanStep::new(format!("cd {LIFE_DIR}")));
        plan.push(PlanStep::expecting("ls", life));
    } else if name == FIND_MY {
        let line = format!("cat {FIND_MY}");
        if cwd.is_root() {
            plan.push(PlanStep::new(line));
        } else {
            for _ in 0..cwd.depth() {
                plan.push(PlanStep::new("cd .."));
            }
            plan.push(PlanStep::expecting(line, VPath::root()));
        }
    } else {
        let line = format!("cat {name}");
        if *cwd == life {
            plan.push(PlanStep::new(line));
        } else {
            plan.push(PlanStep::new(format!("cd {LIFE_DIR}")));
            plan.push(PlanStep::expecting(line, life));
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(plan: &NavigationPlan) -> Vec<&str> {
        plan.steps().iter().map(|s| s.line.as_str()).collect()
    }

    #[test]
    fn test_life_plan() {
        let plan = plan_navigation("life", &VPath::root());
        assert_eq!(lines(&plan), ["cd life", "ls"]);
        assert_eq!(plan.steps()[0].expects, None);
        assert_eq!(plan.steps()[1].expects, Some(VPath::root().join("life")));
    }

    #[test]
    fn test_find_my_from_root_is_single_step() {
        let plan = plan_navigation("find_my", &VPath::root());
        assert_eq!(lines(&plan), ["cat find_my"]);
    }

    #[test]
    fn test_find_my_climbs_first() {
        let plan = plan_navigation("find_my", &VPath::root().join("life"));
        assert_eq!(lines(&plan), ["cd ..", "cat find_my"]);
        assert_eq!(plan.steps()[1].expects, Some(VPath::root()));
    }

    #[test]
    fn test_life_file_plans() {
        let life = VPath::root().join("life");
        assert_eq!(lines(&plan_navigation("now", &life)), ["cat now"]);
        assert_eq!(
            lines(&plan_navigation("now", &VPath::root())),
            ["cd life", "cat now"]
        );
    }
}
