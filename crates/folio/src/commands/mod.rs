//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod build;
pub(crate) mod search;
pub(crate) mod toc;
pub(crate) mod versions;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use build::BuildArgs;
pub(crate) use search::SearchArgs;
pub(crate) use toc::TocArgs;
pub(crate) use versions::VersionsArgs;
