mod generate_reply;

pub use generate_reply::GenerateReplyUseCase;
