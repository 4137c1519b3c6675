//! Command implementations

pub mod check;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, CheckStep, check_words};
pub use simple::run_simple;
pub use survey::{
    RootReport, SurveyStatistics, possible_words, print_survey_statistics, run_survey, survey_root,
};
