/// GitHub Actions entry point: fetch the pull request and validate its title
pub mod action;
/// Local title validation without contacting a platform
pub mod check;
