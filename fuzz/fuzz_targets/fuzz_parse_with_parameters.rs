#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc6838::MediaType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok((media_type, params)) = MediaType::parse_with_parameters(s) {
            let formatted = media_type.format_with_parameters(&params);
            let reparsed = MediaType::parse_with_parameters(&formatted);
            assert_eq!(reparsed.as_ref().map(|(m, _)| m), Ok(&media_type));
            assert_eq!(reparsed.as_ref().map(|(_, p)| p), Ok(&params));
        }
    }
});
