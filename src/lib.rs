pub mod application;
pub mod connector;
pub mod domain;

pub use application::{CompletionClient, GenerateReplyUseCase};

pub use connector::{
    api::{build_router, serve, Container, ContainerConfig},
    GroqClient, MockCompletion,
};

pub use domain::{ChatPrompt, ChatReply, DomainError};
