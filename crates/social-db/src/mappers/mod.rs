//! Model -> entity mappers

mod channel_message;
