pub mod answer;
pub mod instrument;
pub mod interpretation;
pub mod question;
pub mod report;
pub mod respondent;
pub mod scores;
pub mod submission;
