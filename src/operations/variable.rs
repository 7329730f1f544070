//! Variable operations.

use crate::framework::macros::record;
use crate::model::{
    BatchCreateVariableError, BatchGetVariableError, DataSource, DataType, Variable, VariableEntry,
};

record! {
    pub struct BatchCreateVariableRequest {
        variable_entries: list VariableEntry => "variableEntries",
    }
}

record! {
    /// Per-entry failures; entries not listed were created.
    pub struct BatchCreateVariableResult {
        errors: list BatchCreateVariableError => "errors",
    }
}

record! {
    pub struct BatchGetVariableRequest {
        names: list String => "names",
    }
}

record! {
    pub struct BatchGetVariableResult {
        variables: list Variable => "variables",
        errors: list BatchGetVariableError => "errors",
    }
}

record! {
    pub struct CreateVariableRequest {
        name: scalar String => "name",
        data_type: scalar DataType => "dataType",
        data_source: scalar DataSource => "dataSource",
        default_value: scalar String => "defaultValue",
        description: scalar String => "description",
        variable_type: scalar String => "variableType",
    }
}

record! {
    pub struct CreateVariableResult {}
}

record! {
    /// Lists all variables, or the one named. Paginated through `nextToken`.
    pub struct GetVariablesRequest {
        name: scalar String => "name",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetVariablesResult {
        variables: list Variable => "variables",
        next_token: scalar String => "nextToken",
    }
}

record! {
    pub struct UpdateVariableRequest {
        name: scalar String => "name",
        default_value: scalar String => "defaultValue",
        description: scalar String => "description",
        variable_type: scalar String => "variableType",
    }
}

record! {
    pub struct UpdateVariableResult {}
}
