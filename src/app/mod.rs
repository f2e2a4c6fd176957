pub mod predict;
pub mod run;
