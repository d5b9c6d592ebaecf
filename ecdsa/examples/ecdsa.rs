use curve::{AddResult, BigInt, Curve, CurveParams, Point};
use ecdsa::constants::{
    DEMO_A, DEMO_B, DEMO_EPHEMERAL, DEMO_GENERATOR, DEMO_HASH, DEMO_P, DEMO_PRIVATE_KEY,
};
use ecdsa::{PublicKey, Signature, SigningKey, VerifyingKey};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let curve = Curve::new(CurveParams::new(DEMO_P, DEMO_A, DEMO_B));
    let generator = Point::new(DEMO_GENERATOR.0, DEMO_GENERATOR.1);
    let hash = BigInt::from(DEMO_HASH);

    let sk = SigningKey::derive(&curve, generator, BigInt::from(DEMO_PRIVATE_KEY)).expect("derive");
    let vk = sk.verifying_key();

    println!("---------cyclic group of A---------");
    print!("{}", vk.table_a());
    println!("---------cyclic group of B---------");
    print!("{}", vk.table_b());

    println!("---------signing---------");
    let pk_bytes = sk.public_key().to_bytes().expect("serialize pk");
    println!("public key (p,a,b,q,A,B) = {}", sk.public_key());

    let sig = sk
        .sign(&hash, &BigInt::from(DEMO_EPHEMERAL))
        .expect("sign");
    let sig_bytes = sig.to_bytes().expect("serialize sig");
    println!("signature (r, s) = {sig}");

    println!("---------verification---------");
    let pk2 = PublicKey::from_bytes(&pk_bytes).expect("deserialize pk");
    let sig2 = Signature::from_bytes(&sig_bytes).expect("deserialize sig");
    let vk2 = VerifyingKey::from_public_key(&pk2).expect("rebuild tables");

    let v = vk2.verification(&sig2, &hash).expect("verify");
    println!("w  = {}", v.w);
    println!("u1 = {}", v.u1);
    println!("u2 = {}", v.u2);
    match &v.point {
        AddResult::Sum(p) => {
            println!("P  = {p}");
            println!("P.x ≡ {} (mod {}), r ≡ {} (mod {})", p.x, pk2.q, sig2.r, pk2.q);
        }
        AddResult::Identity => println!("P  = point at infinity"),
    }

    if v.valid {
        println!("verification succeeded");
    } else {
        println!("verification failed");
    }
    assert!(v.valid);
}
