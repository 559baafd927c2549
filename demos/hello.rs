use rand::thread_rng;
use rsa_keygen::{BigUint, KeyGenerator, PublicKey, PublicKeyParts};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = thread_rng();
    let bits = 1024;

    let (key, report) = KeyGenerator::new().generate_with_report(&mut rng, bits)?;
    println!(
        "generated a {}-bit modulus in {} attempt(s) ({} exponent restarts, {} validation restarts)",
        key.modulus_bits(),
        report.attempts,
        report.exponent_restarts,
        report.validation_restarts
    );

    let public_key = PublicKey::from(&key);
    println!("n = {}", public_key.n());

    let message = "hello RSA!";
    let m = BigUint::from_bytes_be(message.as_bytes());
    let c = public_key.encrypt(&m)?;
    println!("ciphertext: {}", c);

    let dm = key.decrypt(&c)?;
    let decrypted = String::from_utf8(dm.to_bytes_be())?;
    println!("decrypted: {}", decrypted);
    assert_eq!(decrypted, message);

    Ok(())
}

