pub(crate) mod grading;
pub(crate) mod rubrics;
