//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod publish;

pub(crate) use generate::GenerateArgs;
pub(crate) use publish::PublishArgs;
