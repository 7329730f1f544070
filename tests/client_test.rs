use frauddetector_model::clients::mock::{expect_request, MockDispatcher};
use frauddetector_model::clients::{
    ClientConfig, ClientError, FraudDetectorClient, ServiceErrorKind, WireResponse,
};
use frauddetector_model::framework::ModelError;
use frauddetector_model::model::{DataSource, DataType, DetectorVersionStatus, Language, Rule};
use frauddetector_model::operations::*;
use frauddetector_model::runtime::setup_tracing;
use serde_json::{json, Value};

fn body_json(body: &str) -> Value {
    serde_json::from_str(body).expect("request body is JSON")
}

#[tokio::test]
async fn test_request_is_marshalled_for_the_operation() {
    setup_tracing();

    let mut mock = MockDispatcher::new();
    mock.expect::<CreateVariable>().return_ok("{}");

    let client = FraudDetectorClient::new(mock.clone());
    client
        .create_variable(
            CreateVariableRequest::new()
                .with_name("ip_address")
                .with_data_type(DataType::String)
                .with_data_source(DataSource::Event)
                .with_default_value("0.0.0.0"),
        )
        .await
        .unwrap();

    let requests = mock.requests();
    let request = &requests[0];
    assert_eq!(request.endpoint, "https://frauddetector.us-east-1.amazonaws.com");
    assert_eq!(
        request.header("X-Amz-Target"),
        Some("AWSHawksNestServiceFacade.CreateVariable")
    );
    assert_eq!(
        request.header("Content-Type"),
        Some("application/x-amz-json-1.1")
    );
    assert_eq!(
        body_json(&request.body),
        json!({
            "name": "ip_address",
            "dataType": "STRING",
            "dataSource": "EVENT",
            "defaultValue": "0.0.0.0",
        })
    );
    mock.verify();
}

#[tokio::test]
async fn test_result_is_decoded() {
    let mut mock = MockDispatcher::new();
    mock.expect::<DescribeDetector>().return_ok(
        r#"{
            "detectorId": "payments",
            "detectorVersionSummaries": [
                {"detectorVersionId": "1", "status": "ACTIVE"},
                {"detectorVersionId": "2", "status": "DRAFT", "newField": true}
            ]
        }"#,
    );

    let client = FraudDetectorClient::new(mock.clone());
    let result = client
        .describe_detector(DescribeDetectorRequest::new().with_detector_id("payments"))
        .await
        .unwrap();

    let summaries = result.detector_version_summaries().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].status(), Some(&DetectorVersionStatus::Draft));
    assert_eq!(result.next_token(), None);
}

#[tokio::test]
async fn test_record_response_helper() {
    let mut mock = MockDispatcher::new();
    let rule = Rule::new().with_detector_id("payments").with_rule_id("r1").with_rule_version("1");
    mock.expect::<CreateRule>()
        .return_record(&CreateRuleResult::new().with_rule(rule.clone()));

    let client = FraudDetectorClient::new(mock.clone());
    let result = client
        .create_rule(
            CreateRuleRequest::new()
                .with_rule_id("r1")
                .with_detector_id("payments")
                .with_expression("$ip_address == \"1.2.3.4\"")
                .with_language(Language::Detectorpl)
                .with_outcomes(["block"]),
        )
        .await
        .unwrap();

    assert_eq!(result.rule(), Some(&rule));
    mock.verify();
}

#[tokio::test]
async fn test_missing_required_field_never_dispatches() {
    let mock = MockDispatcher::new();
    let client = FraudDetectorClient::new(mock.clone());

    let result = client
        .put_outcome(PutOutcomeRequest::new().with_description("no name"))
        .await;

    assert_eq!(
        result,
        Err(ClientError::Model(ModelError::MalformedRecord {
            record: "PutOutcomeRequest",
            field: "name",
        }))
    );
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_service_errors_are_classified() {
    let mut mock = MockDispatcher::new();
    mock.expect::<DeleteDetector>().return_status(
        409,
        ServiceErrorKind::Conflict,
        "detector has versions",
    );
    mock.expect::<DeleteDetector>()
        .return_status(429, ServiceErrorKind::Throttling, "slow down");

    let client = FraudDetectorClient::new(mock.clone());
    let request = DeleteDetectorRequest::new().with_detector_id("payments");

    match client.delete_detector(request.clone()).await {
        Err(ClientError::Service(error)) => {
            assert_eq!(error.kind, ServiceErrorKind::Conflict);
            assert_eq!(error.status, 409);
            assert_eq!(error.message, "detector has versions");
            assert_eq!(error.request_id.as_deref(), Some("mock-request"));
        }
        other => panic!("unexpected: {:?}", other),
    }

    match client.delete_detector(request).await {
        Err(ClientError::Service(error)) => assert_eq!(error.kind, ServiceErrorKind::Throttling),
        other => panic!("unexpected: {:?}", other),
    }
    mock.verify();
}

#[tokio::test]
async fn test_transport_errors_pass_through() {
    let mut mock = MockDispatcher::new();
    mock.expect::<GetModels>()
        .return_err(ClientError::from("connection reset".to_string()));

    let client = FraudDetectorClient::new(mock.clone());
    assert_eq!(
        client.get_models(GetModelsRequest::new()).await,
        Err(ClientError::Transport("connection reset".into()))
    );
}

#[tokio::test]
async fn test_undecodable_result_is_a_model_error() {
    let mut mock = MockDispatcher::new();
    mock.expect::<UpdateDetectorVersionStatus>()
        .return_response(WireResponse::ok("not json"));

    let client = FraudDetectorClient::new(mock.clone());
    let result = client
        .update_detector_version_status(
            UpdateDetectorVersionStatusRequest::new()
                .with_detector_id("payments")
                .with_detector_version_id("1")
                .with_status(DetectorVersionStatus::Active),
        )
        .await;

    assert!(matches!(result, Err(ClientError::Model(ModelError::Codec(_)))));
}

#[tokio::test]
async fn test_channel_client_against_a_responder_task() {
    let config = ClientConfig::default().with_endpoint("http://localhost:4566");
    let (client, mut receiver) = FraudDetectorClient::channel(config);

    let responder = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some((request, respond_to)) = expect_request(&mut receiver).await {
            seen.push(request.operation);
            let body = match request.operation {
                "GetDetectors" => r#"{"detectors":[{"detectorId":"payments"}],"nextToken":"n1"}"#,
                _ => "{}",
            };
            let _ = respond_to.send(Ok(WireResponse::ok(body)));
        }
        seen
    });

    let detectors = client
        .get_detectors(GetDetectorsRequest::new().with_max_results(1))
        .await
        .unwrap();
    assert_eq!(detectors.detectors().map(<[_]>::len), Some(1));
    assert_eq!(detectors.next_token().map(String::as_str), Some("n1"));

    client
        .put_detector(PutDetectorRequest::new().with_detector_id("payments"))
        .await
        .unwrap();

    drop(client);
    assert_eq!(responder.await.unwrap(), vec!["GetDetectors", "PutDetector"]);
}
