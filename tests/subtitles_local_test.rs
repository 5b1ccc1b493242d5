use subdetect::{
    decode, detect_and_decode, read_subtitles, DecodeError, MemoryFile, SubtitleElement, SubtitleFormat,
};

fn testdata(name: &str) -> String {
    format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn expected_pair() -> Vec<SubtitleElement> {
    vec![
        SubtitleElement::new(1_000, 2_000, "Hello"),
        SubtitleElement::new(3_500, 5_000, "How are you?\nFine."),
    ]
}

#[test]
fn test_read_local_subtitles() {
    let subtitles = read_subtitles(testdata("sample.srt"));

    assert!(
        subtitles.is_ok(),
        "Failed to read subtitles: {:?}",
        subtitles.err()
    );
    assert_eq!(subtitles.unwrap(), expected_pair());
}

#[test]
fn test_each_sample_is_detected() {
    let cases = [
        ("sample.srt", SubtitleFormat::SubRip),
        ("sample.ass", SubtitleFormat::SubStationAlpha),
        ("sample.vtt", SubtitleFormat::WebVtt),
        ("mislabeled.txt", SubtitleFormat::SubRip),
    ];
    for (name, format) in cases {
        let file = MemoryFile::read(testdata(name)).unwrap();
        let decoded = detect_and_decode(&file);
        assert!(decoded.is_ok(), "{}: {:?}", name, decoded.err());
        assert_eq!(*decoded.unwrap().format, format, "{}", name);
    }

    let ass = read_subtitles(testdata("sample.ass")).unwrap();
    assert_eq!(ass, expected_pair());
    let vtt = read_subtitles(testdata("sample.vtt")).unwrap();
    assert_eq!(vtt, expected_pair());
}

#[test]
fn test_microdvd_sample_uses_declared_frame_rate() {
    let file = MemoryFile::read(testdata("sample.sub")).unwrap();
    let decoded = detect_and_decode(&file).unwrap();
    assert_eq!(*decoded.format, SubtitleFormat::MicroDvd);
    assert_eq!(
        decoded.elements,
        vec![
            SubtitleElement::new(1_000, 2_000, "Hello"),
            SubtitleElement::new(3_520, 5_000, "How are you?\nFine."),
        ]
    );
}

#[test]
fn test_same_bytes_decode_identically_under_any_name() {
    let data = std::fs::read(testdata("mislabeled.txt")).unwrap();
    let as_srt = decode(&MemoryFile::new("movie.srt", data.clone())).unwrap();
    let as_txt = decode(&MemoryFile::new("movie.txt", data)).unwrap();
    assert_eq!(as_srt, vec![SubtitleElement::new(1_000, 2_000, "Hello")]);
    assert_eq!(as_srt, as_txt);
}

#[test]
fn test_broken_and_blank_files() {
    match read_subtitles(testdata("broken.srt")) {
        Err(DecodeError::CorruptContent { format, .. }) => assert_eq!(format, "SubRip"),
        other => panic!("expected corrupt content, got {:?}", other),
    }

    let blank = read_subtitles(testdata("blank.srt")).unwrap_err();
    assert!(blank.is_unsupported_format(), "{}", blank);

    let missing = read_subtitles(testdata("does_not_exist.srt")).unwrap_err();
    assert!(matches!(missing, DecodeError::Io(_)));
}
