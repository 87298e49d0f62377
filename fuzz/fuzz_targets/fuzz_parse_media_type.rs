#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc6838::MediaType;

fuzz_target!(|data: &[u8]| {
    // Any accepted input must survive a format/parse round trip
    if let Ok(media_type) = MediaType::try_from(data) {
        let formatted = media_type.to_string();
        assert_eq!(MediaType::parse(&formatted).as_ref(), Ok(&media_type));
    }
});
