//! Module entity type - the leaf of the curriculum tree

use serde::{Deserialize, Serialize};

use crate::core::element::{AcademicElement, ElementInfo};

/// Average required to pass and collect credits, on the 0-20 scale
pub const PASS_THRESHOLD: f64 = 10.0;

/// Teaching weeks per semester, used for the total-hours figure
const WEEKS: f64 = 15.0;

/// Grade record for a module's evaluation components, each in [0, 20]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    #[serde(default)]
    pub tp: f64,
    #[serde(default)]
    pub td: f64,
    #[serde(default)]
    pub exam: f64,
}

/// A teaching module with pedagogical and evaluation attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Identity (code + title)
    #[serde(flatten)]
    pub info: ElementInfo,

    /// Weight of this module inside its unit
    #[serde(default = "default_coef")]
    pub coef: f64,

    /// Credits awarded when the module is passed
    #[serde(default = "default_credit")]
    pub credit: u32,

    /// Weekly lecture hours
    #[serde(default)]
    pub hours_lecture: f64,

    /// Weekly directed-work (TD) hours
    #[serde(default)]
    pub hours_td: f64,

    /// Weekly practical-work (TP) hours
    #[serde(default)]
    pub hours_tp: f64,

    /// Teaching mode (e.g., "In-person")
    #[serde(default = "default_teaching_mode")]
    pub teaching_mode: String,

    /// Share of the final average from continuous evaluation (TP/TD)
    #[serde(default = "default_continuous_percent")]
    pub continuous_percent: f64,

    /// Share of the final average from the exam
    #[serde(default = "default_exam_percent")]
    pub exam_percent: f64,

    /// Grade record, controlled through [`Module::set_grade`]
    #[serde(default)]
    grades: Grades,
}

fn default_coef() -> f64 {
    1.0
}

fn default_credit() -> u32 {
    1
}

fn default_teaching_mode() -> String {
    "In-person".to_string()
}

fn default_continuous_percent() -> f64 {
    40.0
}

fn default_exam_percent() -> f64 {
    60.0
}

impl AcademicElement for Module {
    fn info(&self) -> &ElementInfo {
        &self.info
    }
}

impl Module {
    /// Create a module with default weighting and no hours
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            info: ElementInfo::new(code, title),
            coef: default_coef(),
            credit: default_credit(),
            hours_lecture: 0.0,
            hours_td: 0.0,
            hours_tp: 0.0,
            teaching_mode: default_teaching_mode(),
            continuous_percent: default_continuous_percent(),
            exam_percent: default_exam_percent(),
            grades: Grades::default(),
        }
    }

    /// Set only the provided grade components; unset components keep
    /// their prior value
    pub fn set_grade(&mut self, tp: Option<f64>, td: Option<f64>, exam: Option<f64>) {
        if let Some(tp) = tp {
            self.grades.tp = tp;
        }
        if let Some(td) = td {
            self.grades.td = td;
        }
        if let Some(exam) = exam {
            self.grades.exam = exam;
        }
    }

    /// Current grade record
    pub fn grades(&self) -> &Grades {
        &self.grades
    }

    /// Total hours over the semester (all hour types)
    pub fn total_hours(&self) -> f64 {
        WEEKS * (self.hours_lecture + self.hours_td + self.hours_tp)
    }

    /// Calculate the module average from grades and evaluation percentages.
    ///
    /// The continuous share splits evenly between TP and TD when both have
    /// hours, and goes entirely to whichever one has hours otherwise. With
    /// no TP or TD hours only the exam counts, scaled by `exam_percent`
    /// without renormalization; such a module cannot reach 20/20 unless
    /// `exam_percent` is 100.
    pub fn average(&self) -> f64 {
        let Grades { tp, td, exam } = self.grades;

        let mut percent_tp = 0.0;
        let mut percent_td = 0.0;
        if self.hours_tp > 0.0 && self.hours_td > 0.0 {
            percent_tp = self.continuous_percent / 2.0;
            percent_td = self.continuous_percent / 2.0;
        } else if self.hours_td > 0.0 {
            percent_td = self.continuous_percent;
        } else if self.hours_tp > 0.0 {
            percent_tp = self.continuous_percent;
        }

        tp * percent_tp / 100.0 + td * percent_td / 100.0 + exam * self.exam_percent / 100.0
    }

    /// Credits earned: full `credit` when the average reaches the pass
    /// threshold, zero otherwise
    pub fn credits(&self) -> u32 {
        if self.average() >= PASS_THRESHOLD {
            self.credit
        } else {
            0
        }
    }

    /// Whether the module is passed at its current grades
    pub fn passed(&self) -> bool {
        self.average() >= PASS_THRESHOLD
    }
}
