use cadenza_core::{Envelope, json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TestData {
    id: u32,
    name: String,
}

#[test]
fn test_to_writer_appends_to_buffer() {
    let mut buf = b"prefix:".to_vec();
    json::to_writer(&mut buf, &Envelope::new(200, "hi")).expect("Failed to write");

    assert_eq!(buf, br#"prefix:{"code":200,"data":"hi"}"#);
}

#[test]
fn test_to_writer_matches_to_vec() {
    let data = TestData {
        id: 3,
        name: "Three".to_string(),
    };

    let mut buf = Vec::new();
    json::to_writer(&mut buf, &data).expect("Failed to write");
    assert_eq!(buf, json::to_vec(&data).expect("Failed to serialize"));
}

#[test]
fn test_envelope_to_vec_decodes_back() {
    let envelope = Envelope::new(
        202,
        TestData {
            id: 9,
            name: "Nine".to_string(),
        },
    );

    let bytes = envelope.to_vec().expect("Failed to encode");
    let decoded: Envelope<TestData> = json::from_slice(&bytes).expect("Failed to decode");
    assert_eq!(decoded, envelope);
}
