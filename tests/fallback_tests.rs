//! Backend client against an unreachable server and a canned loopback server

use dept_advisor::core::api::{
    AdvisorApi, AdvisorClient, AdvisorData, ApiError, DataSource, Endpoint,
};
use dept_advisor::core::quiz::session_from_choices;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Nothing listens on port 1 of the loopback interface
fn unreachable_client() -> AdvisorClient {
    AdvisorClient::new("http://127.0.0.1:1", Duration::from_secs(2))
}

#[test]
fn read_endpoints_fall_back_to_samples() {
    let client = unreachable_client();
    let data = AdvisorData::new(&client, true);

    let recs = data.recommendations().expect("fallback enabled");
    assert_eq!(recs.source, DataSource::Sample);
    assert_eq!(recs.data.len(), 5);
    assert_eq!(
        recs.notice.map(|n| n.description),
        Some("Couldn't connect to the server. Showing sample recommendations.".to_string())
    );

    let cutoffs = data.cutoffs().expect("fallback enabled");
    assert!(cutoffs.is_sample());
    assert_eq!(cutoffs.data.len(), 20);
}

#[test]
fn fallback_can_be_disabled() {
    let client = unreachable_client();
    let data = AdvisorData::new(&client, false);

    match data.testimonials() {
        Err(ApiError::Transport { endpoint, .. }) => assert_eq!(endpoint, Endpoint::Testimonials),
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[test]
fn submissions_never_fall_back() {
    let client = unreachable_client();
    assert!(matches!(
        client.submit_gpa(3.5),
        Err(ApiError::Transport {
            endpoint: Endpoint::SubmitGpa,
            ..
        })
    ));

    let quiz = session_from_choices("1,2,3,4,5,1").unwrap();
    let answers = quiz.submission().unwrap();
    assert!(client.submit_interest_quiz(answers).is_err());
}

/// Serve one canned HTTP response on a loopback port.
///
/// Returns a client pointed at the server and a handle yielding the request line.
fn serve_once(status: &str, body: &'static str) -> (AdvisorClient, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        request_line.trim_end().to_string()
    });

    let client = AdvisorClient::new(&format!("http://{addr}"), Duration::from_secs(5));
    (client, handle)
}

#[test]
fn server_error_maps_to_status() {
    let (client, server) = serve_once("500 Internal Server Error", "boom");

    match client.cutoffs() {
        Err(ApiError::Status {
            endpoint,
            status,
            body,
        }) => {
            assert_eq!(endpoint, Endpoint::Cutoffs);
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert_eq!(server.join().unwrap(), "GET /cutoffs HTTP/1.1");
}

#[test]
fn malformed_body_maps_to_decode() {
    let (client, server) = serve_once("200 OK", "<html>not json</html>");

    assert!(matches!(
        client.recommendations(),
        Err(ApiError::Decode {
            endpoint: Endpoint::Recommendations,
            ..
        })
    ));
    server.join().unwrap();
}

#[test]
fn missing_envelope_field_is_empty_list() {
    let (client, server) = serve_once("200 OK", "{}");

    let testimonials = client.testimonials().expect("empty object decodes");
    assert!(testimonials.is_empty());
    server.join().unwrap();
}

#[test]
fn live_envelope_is_not_replaced_by_samples() {
    let (client, server) = serve_once(
        "200 OK",
        r#"{"recommendations":[{"id":"7","name":"Robotics","description":"Build robots","matchPercentage":91.5,"cutoff":3.7}]}"#,
    );
    let data = AdvisorData::new(&client, true);

    let recs = data.recommendations().expect("live response");
    assert_eq!(recs.source, DataSource::Live);
    assert!(recs.notice.is_none());
    assert_eq!(recs.data.len(), 1);
    assert_eq!(recs.data[0].name, "Robotics");
    assert_eq!(server.join().unwrap(), "GET /recommendations HTTP/1.1");
}

#[test]
fn rejected_submission_maps_to_status() {
    let (client, server) = serve_once("422 Unprocessable Entity", r#"{"detail":"gpa"}"#);

    assert!(matches!(
        client.submit_gpa(3.5),
        Err(ApiError::Status {
            endpoint: Endpoint::SubmitGpa,
            status: 422,
            ..
        })
    ));
    assert_eq!(server.join().unwrap(), "POST /submit-gpa HTTP/1.1");
}
