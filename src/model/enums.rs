//! Enumerated values of the fraud detection API.

use crate::framework::macros::wire_enum;

wire_enum! {
    /// Where a variable's value comes from.
    pub enum DataSource {
        Event => "EVENT",
        ModelScore => "MODEL_SCORE",
        ExternalModelScore => "EXTERNAL_MODEL_SCORE",
    }
}

wire_enum! {
    /// Value type of a variable.
    pub enum DataType {
        String => "STRING",
        Integer => "INTEGER",
        Float => "FLOAT",
        Boolean => "BOOLEAN",
    }
}

wire_enum! {
    /// Lifecycle status of a detector version.
    ///
    /// Only `DRAFT` versions can be updated; `ACTIVE` versions cannot be deleted.
    pub enum DetectorVersionStatus {
        Draft => "DRAFT",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Rule expression language.
    pub enum Language {
        Detectorpl => "DETECTORPL",
    }
}

wire_enum! {
    pub enum ModelEndpointStatus {
        Associated => "ASSOCIATED",
        Dissociated => "DISSOCIATED",
    }
}

wire_enum! {
    /// Payload format sent to an external model endpoint.
    pub enum ModelInputDataFormat {
        TextCsv => "TEXT_CSV",
        ApplicationJson => "APPLICATION_JSON",
    }
}

wire_enum! {
    /// Payload format returned by an external model endpoint.
    pub enum ModelOutputDataFormat {
        TextCsv => "TEXT_CSV",
        ApplicationJsonlines => "APPLICATION_JSONLINES",
    }
}

wire_enum! {
    pub enum ModelSource {
        Sagemaker => "SAGEMAKER",
    }
}

wire_enum! {
    pub enum ModelTypeEnum {
        OnlineFraudInsights => "ONLINE_FRAUD_INSIGHTS",
    }
}

wire_enum! {
    /// Training and activation status of a model version.
    pub enum ModelVersionStatus {
        TrainingInProgress => "TRAINING_IN_PROGRESS",
        TrainingComplete => "TRAINING_COMPLETE",
        ActivateRequested => "ACTIVATE_REQUESTED",
        ActivateInProgress => "ACTIVATE_IN_PROGRESS",
        Active => "ACTIVE",
        InactivateInProgress => "INACTIVATE_IN_PROGRESS",
        Inactive => "INACTIVE",
        Error => "ERROR",
    }
}
