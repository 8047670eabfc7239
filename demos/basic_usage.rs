// demos/basic_usage.rs

use chrono::Utc;
use hmac_jwt::{builder, is_valid, read_payload, validator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hmac-jwt Basic Usage Example");

    let secret = "Hello123$$Abc!!4538";
    let now = Utc::now().timestamp();

    // 1. Issue a token with the one-call facade
    let token = hmac_jwt::issue(42, secret, now + 300, "issuer.example")?;
    println!("\nIssued token: {}...", &token[..40]);

    // 2. Validate signature and expiration
    println!("Token is valid: {}", is_valid(&token, secret));
    println!("Wrong secret accepted: {}", is_valid(&token, "Wrong123$$Secret!"));

    // 3. Read the verified claims
    let payload = read_payload(&token, secret)?;
    println!("\nDecoded payload:");
    for (name, value) in &payload {
        println!("  {name}: {value}");
    }

    // 4. Larger payloads via the builder
    let jwt = builder()
        .private_claim("user_id", 42)
        .private_claim("admin", true)
        .private_claim("scopes", vec!["read", "write"])
        .secret(secret)?
        .expiration(now + 3600)?
        .issuer("issuer.example")
        .build()?;
    println!("\nBuilder token: {}...", &jwt.token()[..40]);

    // 5. Step through validation explicitly when the failure reason matters
    let parser = validator(jwt.token(), secret);
    let decoded = parser.validate()?.validate_expiration(now)?.parse()?;
    println!("admin claim: {:?}", decoded.bool_claim("admin")?);

    // 6. Tampering is caught by the signature check
    let tampered = format!("{}x", jwt.token());
    match validator(&tampered, secret).validate() {
        Ok(_) => println!("Tampered token accepted (unexpected!)"),
        Err(e) => println!("\nTampered token rejected: {e}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_runs() {
        // Test that the example runs without panicking
        main().unwrap();
    }
}
