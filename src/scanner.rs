use std::io::Read;

use crate::reader::ByteReader;
use crate::stats::UrlStats;

fn is_domain_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'-'
}

fn is_path_byte(byte: u8) -> bool {
    byte == b'/'
        || byte.is_ascii_alphanumeric()
        || byte == b'.'
        || byte == b','
        || byte == b'+'
        || byte == b'_'
}

/// Single forward pass over the reader, tallying every recognized URL.
///
/// Recognition is a literal byte matcher: `http`, an optional `s`, `://`,
/// then a maximal run of domain bytes and, after `/`, a maximal run of path
/// bytes. Only lowercase schemes match. Bytes consumed by a failed attempt
/// are never retried, but the byte that caused the failure is re-examined as
/// the start of the next attempt, so `hhttp://x.com` is still recognized.
///
/// A URL with a non-empty domain bumps the total count and the domain table;
/// its path (normalized to `/` when absent) bumps the path table. An empty
/// domain discards the match entirely.
pub fn scan<R: Read>(mut reader: ByteReader<R>) -> UrlStats {
    let mut stats = UrlStats::default();
    // Last byte read but not yet classified, carried across iterations so a
    // token terminator can start the next match.
    let mut pending: Option<u8> = None;

    'outer: loop {
        let byte = match pending.take().or_else(|| reader.next()) {
            Some(byte) => byte,
            None => break,
        };
        if byte != b'h' {
            continue;
        }

        for expected in [b't', b't', b'p'] {
            match reader.next() {
                Some(byte) if byte == expected => {}
                Some(byte) => {
                    pending = Some(byte);
                    continue 'outer;
                }
                None => break 'outer,
            }
        }

        let mut byte = match reader.next() {
            Some(byte) => byte,
            None => break,
        };
        if byte == b's' {
            byte = match reader.next() {
                Some(byte) => byte,
                None => break,
            };
        }
        if byte != b':' {
            pending = Some(byte);
            continue;
        }

        for _ in 0..2 {
            match reader.next() {
                Some(b'/') => {}
                Some(byte) => {
                    pending = Some(byte);
                    continue 'outer;
                }
                None => break 'outer,
            }
        }

        let mut domain = String::new();
        let mut terminator = None;
        loop {
            match reader.next() {
                Some(byte) if is_domain_byte(byte) => domain.push(byte as char),
                Some(byte) => {
                    terminator = Some(byte);
                    break;
                }
                None => break,
            }
        }

        if domain.is_empty() {
            match terminator {
                Some(byte) => {
                    pending = Some(byte);
                    continue;
                }
                None => break,
            }
        }

        stats.total_urls += 1;
        *stats.domains.entry(domain).or_insert(0) += 1;

        let mut path = String::new();
        if terminator == Some(b'/') {
            let mut byte = b'/';
            loop {
                path.push(byte as char);
                match reader.next() {
                    Some(next) if is_path_byte(next) => byte = next,
                    Some(next) => {
                        terminator = Some(next);
                        break;
                    }
                    None => {
                        terminator = None;
                        break;
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        *stats.paths.entry(path).or_insert(0) += 1;

        if let Some(byte) = terminator {
            pending = Some(byte);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn scan_bytes(input: &str) -> UrlStats {
        scan(ByteReader::new(Cursor::new(input.as_bytes().to_vec())))
    }

    fn table(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn no_scheme_no_matches() {
        let stats = scan_bytes("nothing of interest in this line");
        assert_eq!(stats.total_urls, 0);
        assert!(stats.domains.is_empty());
        assert!(stats.paths.is_empty());
    }

    #[test]
    fn repeated_url_counted_twice() {
        let stats = scan_bytes("see http://example.com/a/b and http://example.com/a/b again");
        assert_eq!(stats.total_urls, 2);
        assert_eq!(stats.domains, table(&[("example.com", 2)]));
        assert_eq!(stats.paths, table(&[("/a/b", 2)]));
    }

    #[test]
    fn bare_domain_normalizes_path_to_root() {
        let stats = scan_bytes("http://x.com");
        assert_eq!(stats.total_urls, 1);
        assert_eq!(stats.domains, table(&[("x.com", 1)]));
        assert_eq!(stats.paths, table(&[("/", 1)]));
    }

    #[test]
    fn mismatched_scheme_is_ignored() {
        let stats = scan_bytes("httpx://x.com");
        assert_eq!(stats.total_urls, 0);
        assert!(stats.domains.is_empty());
        assert!(stats.paths.is_empty());
    }

    #[test]
    fn secure_scheme_matches() {
        let stats = scan_bytes("https://secure.example.org/login");
        assert_eq!(stats.domains, table(&[("secure.example.org", 1)]));
        assert_eq!(stats.paths, table(&[("/login", 1)]));
    }

    #[test]
    fn uppercase_scheme_is_not_matched() {
        assert_eq!(scan_bytes("HTTP://x.com and HTTPS://y.com").total_urls, 0);
    }

    #[test]
    fn mismatch_byte_restarts_the_search() {
        let stats = scan_bytes("hhttp://x.com");
        assert_eq!(stats.total_urls, 1);
        assert_eq!(stats.domains, table(&[("x.com", 1)]));

        let stats = scan_bytes("hthttp://y.com");
        assert_eq!(stats.total_urls, 1);
        assert_eq!(stats.domains, table(&[("y.com", 1)]));
    }

    #[test]
    fn empty_domain_discards_match() {
        let stats = scan_bytes("http:// and http:///path");
        assert_eq!(stats.total_urls, 0);
        assert!(stats.domains.is_empty());
        assert!(stats.paths.is_empty());
    }

    #[test]
    fn query_and_fragment_bytes_terminate_the_path() {
        let stats = scan_bytes("http://x.com/a?b=c http://y.com/d#e");
        assert_eq!(stats.paths, table(&[("/a", 1), ("/d", 1)]));
    }

    #[test]
    fn truncated_input_records_nothing_partial() {
        assert_eq!(scan_bytes("htt").total_urls, 0);
        assert_eq!(scan_bytes("https").total_urls, 0);
        assert_eq!(scan_bytes("http:/").total_urls, 0);
    }

    #[test]
    fn domain_ending_at_eof_is_complete() {
        let stats = scan_bytes("trailing http://end.example.net");
        assert_eq!(stats.domains, table(&[("end.example.net", 1)]));
        assert_eq!(stats.paths, table(&[("/", 1)]));
    }

    #[test]
    fn token_spanning_refill_boundary() {
        let input =
            "padding http://a-rather-long-domain.example.com/with/a/long,path+name_too.txt tail";
        let small = scan(ByteReader::with_capacity(
            Cursor::new(input.as_bytes().to_vec()),
            8,
        ));
        let large = scan(ByteReader::new(Cursor::new(input.as_bytes().to_vec())));
        assert_eq!(small, large);
        assert_eq!(
            small.domains,
            table(&[("a-rather-long-domain.example.com", 1)])
        );
        assert_eq!(small.paths, table(&[("/with/a/long,path+name_too.txt", 1)]));
    }

    #[test]
    fn scanning_twice_is_idempotent() {
        let input = "http://a.com/x http://b.com http://a.com/x";
        let first = scan_bytes(input);
        let second = scan_bytes(input);
        assert_eq!(first, second);
        assert_eq!(first.total_urls, 3);
    }
}
