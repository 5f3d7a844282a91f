use email_reply_parser::{
    EmailReplyParser, Language, LineEndings, ParseError, ParserConfig, ReplyParser,
};

const SIMPLE_REPLY: &str = "Hi,\nhow are you?\n\nOn Mon, Jan 1, 2018, Bob wrote:\n> fine thanks";

#[test]
fn test_default_parser_matches_facade() {
    let parser = ReplyParser::default();
    assert_eq!(
        EmailReplyParser::parse_reply(SIMPLE_REPLY),
        parser.parse_reply(SIMPLE_REPLY)
    );
    assert_eq!("Hi,\nhow are you?", ReplyParser::shared().parse_reply(SIMPLE_REPLY));
}

#[test]
fn test_read_bytes_accepts_utf8() {
    let message = EmailReplyParser::read_bytes("Merci !\n> Ça va ?".as_bytes()).unwrap();
    assert_eq!("Merci !", message.reply());
}

#[test]
fn test_read_bytes_rejects_invalid_utf8() {
    let result = EmailReplyParser::read_bytes(&[b'H', b'i', 0xff, 0xfe]);
    assert!(matches!(result, Err(ParseError::InvalidInput(_))));

    let result = ReplyParser::default().read_bytes(&[0xc3]);
    assert!(matches!(result, Err(ParseError::InvalidInput(_))));
}

#[test]
fn test_language_selection() {
    let german = ReplyParser::new(&ParserConfig {
        languages: vec![Language::German],
        ..ParserConfig::default()
    })
    .unwrap();

    // Without English the quote header is ordinary text.
    let reply = german.parse_reply(SIMPLE_REPLY);
    assert!(reply.contains("Bob wrote:"));

    let reply = german.parse_reply("Ja.\n\nAm Montag schrieb Bob:\n> Kommst du?");
    assert_eq!("Ja.", reply);
}

#[test]
fn test_no_languages_still_splits_quotes() {
    let parser = ReplyParser::new(&ParserConfig {
        languages: Vec::new(),
        ..ParserConfig::default()
    })
    .unwrap();

    assert_eq!("Top", parser.parse_reply("Top\n> quoted"));
    assert!(!parser.patterns().is_forward_header("Begin forwarded message:"));
}

#[test]
fn test_custom_forward_phrase() {
    let parser = ReplyParser::new(&ParserConfig {
        forward_phrases: vec!["Mensaje reenviado".to_string()],
        ..ParserConfig::default()
    })
    .unwrap();

    let message = parser.read("Mira esto.\n\n---------- Mensaje reenviado ----------\nDe: Ana\n\nHola");
    assert!(message.is_forwarded());
    assert_eq!("Mira esto.", message.reply().trim());

    // The default parser does not know the phrase.
    let message = EmailReplyParser::read("---------- Mensaje reenviado ----------\nHola");
    assert!(!message.is_forwarded());
}

#[test]
fn test_bare_carriage_return_policy() {
    let text = "Hello\r> quoted";

    let message = EmailReplyParser::read(text);
    assert_eq!(1, message.fragments().len());
    assert_eq!("Hello\r> quoted", message.reply());

    let parser = ReplyParser::new(&ParserConfig {
        line_endings: LineEndings::Any,
        ..ParserConfig::default()
    })
    .unwrap();
    let message = parser.read(text);
    assert_eq!(2, message.fragments().len());
    assert_eq!("Hello", message.reply());
}

#[test]
fn test_mixed_line_endings_fold_crlf_first() {
    let parser = ReplyParser::new(&ParserConfig {
        line_endings: LineEndings::Any,
        ..ParserConfig::default()
    })
    .unwrap();
    let message = parser.read("a\r\nb\rc");
    assert_eq!("a\nb\nc", message.text());
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: ParserConfig = serde_json::from_str(r#"{"languages": ["french"]}"#).unwrap();
    assert_eq!(vec![Language::French], config.languages);
    assert!(config.forward_phrases.is_empty());
    assert_eq!(LineEndings::CrLf, config.line_endings);

    let config: ParserConfig = serde_json::from_str(r#"{"line_endings": "any"}"#).unwrap();
    assert_eq!(ParserConfig::default().languages, config.languages);
    assert_eq!(LineEndings::Any, config.line_endings);
}

#[test]
fn test_unknown_language_is_rejected() {
    let result = serde_json::from_str::<ParserConfig>(r#"{"languages": ["spanish"]}"#);
    assert!(result.is_err());
}

#[test]
fn test_message_serializes() {
    let message = EmailReplyParser::read(SIMPLE_REPLY);
    let value = serde_json::to_value(&message).unwrap();

    let fragments = value["fragments"].as_array().unwrap();
    assert_eq!(2, fragments.len());
    assert_eq!("Hi,\nhow are you?", fragments[0]["content"]);
    assert_eq!(false, fragments[0]["hidden"]);
    assert_eq!(true, fragments[1]["quoted"]);
    assert_eq!(false, fragments[1]["forwarded"]);
}

#[test]
fn test_parser_shared_between_threads() {
    let parser = ReplyParser::shared();
    let inputs = [
        SIMPLE_REPLY,
        "Hello\n--\nSent from my iPhone",
        "> already all quoted",
        "Begin forwarded message:\nFrom: Bob\n\nHi",
    ];

    let replies: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|text| scope.spawn(move || parser.parse_reply(text)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(vec!["Hi,\nhow are you?", "Hello", "", ""], replies);
}
