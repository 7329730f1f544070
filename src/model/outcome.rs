use crate::framework::macros::record;

record! {
    /// A named outcome rules can emit.
    pub struct Outcome {
        name: scalar String => "name",
        description: scalar String => "description",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}
