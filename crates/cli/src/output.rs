use stubdns_infrastructure::dns::LookupResult;

/// Renders addresses as `['a', 'b', 'c']`.
pub fn format_addresses(addresses: &[String]) -> String {
    let quoted: Vec<String> = addresses.iter().map(|a| format!("'{}'", a)).collect();
    format!("[{}]", quoted.join(", "))
}

pub fn print_lookup(domain: &str, result: &LookupResult) {
    println!(
        "IP addresses for {}: {}",
        domain,
        format_addresses(&result.address_strings())
    );
    println!("Query time: {} ms", result.elapsed_ms());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_addresses() {
        assert_eq!(format_addresses(&[]), "[]");
        assert_eq!(
            format_addresses(&["1.1.1.1".to_string(), "8.8.8.8".to_string()]),
            "['1.1.1.1', '8.8.8.8']"
        );
    }
}
