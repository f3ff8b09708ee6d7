// Error types shared by the API client and the interactive loop.
//
// `FetchError` covers everything that can go wrong talking to the Dog API
// (transport, HTTP status, response body). `InputError` covers what the
// user can get wrong at the prompt. Neither ever terminates the session:
// the loop prints them and goes back to the main menu.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the Dog API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("connection to the Dog API failed: {0}")]
    Network(#[source] reqwest::Error),
    /// The endpoint answered 404 (unknown breed or sub-breed path).
    #[error("nothing found at {0}")]
    NotFound(String),
    #[error("the Dog API answered with HTTP {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Malformed(#[source] serde_json::Error),
    /// Well-formed body whose `status` field is not `"success"`.
    #[error("the Dog API reported status '{0}'")]
    Unsuccessful(String),
    #[error("the Dog API returned '{0}', which is not an image URL")]
    NotAnImageUrl(String),
}

/// Invalid input typed at one of the prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid choice. Please select a number between 1 and 4.")]
    InvalidChoice(String),
    #[error("'{0}' is not a valid breed.")]
    UnknownBreed(String),
    #[error("The '{0}' breed does not have any sub-breeds.")]
    NoSubBreeds(String),
    #[error("'{sub_breed}' is not a valid sub-breed of '{breed}'.")]
    UnknownSubBreed { breed: String, sub_breed: String },
}
