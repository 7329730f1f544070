//! Outcome and event operations.

use crate::framework::macros::record;
use crate::model::Outcome;

record! {
    pub struct PutOutcomeRequest {
        name: scalar String => "name",
        description: scalar String => "description",
    }
}

record! {
    pub struct PutOutcomeResult {}
}

record! {
    pub struct GetOutcomesRequest {
        name: scalar String => "name",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetOutcomesResult {
        outcomes: list Outcome => "outcomes",
        next_token: scalar String => "nextToken",
    }
}

record! {
    pub struct DeleteEventRequest {
        event_id: scalar String => "eventId",
    }
}

record! {
    pub struct DeleteEventResult {}
}
