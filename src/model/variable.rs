//! Variables and batch variable errors.

use crate::framework::macros::record;
use crate::model::{DataSource, DataType};

record! {
    /// A variable as stored by the service.
    pub struct Variable {
        name: scalar String => "name",
        data_type: scalar DataType => "dataType",
        data_source: scalar DataSource => "dataSource",
        default_value: scalar String => "defaultValue",
        description: scalar String => "description",
        variable_type: scalar String => "variableType",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

record! {
    /// One variable in a batch create request.
    ///
    /// Data type and source are carried as raw wire strings here; the service
    /// reports bad values per entry in [`BatchCreateVariableError`].
    pub struct VariableEntry {
        name: scalar String => "name",
        data_type: scalar String => "dataType",
        data_source: scalar String => "dataSource",
        default_value: scalar String => "defaultValue",
        description: scalar String => "description",
        variable_type: scalar String => "variableType",
    }
}

record! {
    pub struct BatchCreateVariableError {
        name: scalar String => "name",
        code: scalar i32 => "code",
        message: scalar String => "message",
    }
}

record! {
    pub struct BatchGetVariableError {
        name: scalar String => "name",
        code: scalar i32 => "code",
        message: scalar String => "message",
    }
}
