//! # Fraud Detector Client
//!
//! Typed entry point for every operation.
//!
//! Each call runs the same pipeline in [`FraudDetectorClient::invoke`]:
//!
//! 1. Check the operation's required fields ([`validate`]).
//! 2. Marshal the request record into a [`WireRequest`](crate::clients::WireRequest).
//! 3. Hand it to the [`Dispatch`] implementation.
//! 4. Decode the result record, or the service error.
//!
//! A request missing a required field never reaches the dispatcher.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::config::ClientConfig;
use crate::clients::dispatch::{ChannelDispatcher, Dispatch, DispatchRequest};
use crate::clients::error::ClientError;
use crate::clients::marshal::{marshall, unmarshall};
use crate::operations::*;

/// Client for the fraud detection service, generic over its transport.
#[derive(Clone)]
pub struct FraudDetectorClient<D: Dispatch> {
    config: ClientConfig,
    dispatcher: D,
}

impl<D: Dispatch> FraudDetectorClient<D> {
    /// Creates a client with the default configuration.
    pub fn new(dispatcher: D) -> Self {
        Self::with_config(ClientConfig::default(), dispatcher)
    }

    pub fn with_config(config: ClientConfig, dispatcher: D) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Invokes operation `O` with the given request.
    #[instrument(skip(self, input), fields(operation = O::NAME))]
    pub async fn invoke<O: Operation>(&self, input: O::Input) -> Result<O::Output, ClientError> {
        debug!(?input, "invoke called");

        if let Err(e) = validate::<O>(&input) {
            warn!(error = %e, "Rejected before dispatch");
            return Err(e.into());
        }

        let request = marshall::<O>(&self.config, &input)?;
        info!(endpoint = %request.endpoint, "Sending request");

        let response = match self.dispatcher.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Dispatch failed");
                return Err(e);
            }
        };

        match unmarshall::<O>(&response) {
            Ok(output) => {
                info!(status = response.status, "Request ok");
                Ok(output)
            }
            Err(e) => {
                warn!(status = response.status, error = %e, "Request failed");
                Err(e)
            }
        }
    }
}

impl FraudDetectorClient<ChannelDispatcher> {
    /// Creates a client backed by a channel, returning the receiver that must
    /// answer its requests.
    pub fn channel(config: ClientConfig) -> (Self, mpsc::Receiver<DispatchRequest>) {
        let (dispatcher, receiver) = ChannelDispatcher::new(config.channel_buffer);
        (Self::with_config(config, dispatcher), receiver)
    }
}

macro_rules! operation_methods {
    ($($op:ident),* $(,)?) => {
        impl<D: Dispatch> FraudDetectorClient<D> {
            $(
                paste::paste! {
                    /// Invokes the operation of the same name.
                    pub async fn [<$op:snake>](
                        &self,
                        request: [<$op Request>],
                    ) -> Result<[<$op Result>], ClientError> {
                        self.invoke::<$op>(request).await
                    }
                }
            )*
        }
    };
}

operation_methods! {
    BatchCreateVariable,
    BatchGetVariable,
    CreateDetectorVersion,
    CreateModelVersion,
    CreateRule,
    CreateVariable,
    DeleteDetector,
    DeleteDetectorVersion,
    DeleteEvent,
    DeleteRuleVersion,
    DescribeDetector,
    DescribeModelVersions,
    GetDetectorVersion,
    GetDetectors,
    GetExternalModels,
    GetModelVersion,
    GetModels,
    GetOutcomes,
    GetPrediction,
    GetRules,
    GetVariables,
    PutDetector,
    PutExternalModel,
    PutModel,
    PutOutcome,
    UpdateDetectorVersion,
    UpdateDetectorVersionMetadata,
    UpdateDetectorVersionStatus,
    UpdateModelVersion,
    UpdateRuleMetadata,
    UpdateRuleVersion,
    UpdateVariable,
}
