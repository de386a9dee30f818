use std::io::{Cursor, Read};

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

use crate::algorithm::HashAlgorithm;

/// Read buffer size for streaming hashes. Memory use is bounded by this,
/// independent of input size.
pub(crate) const CHUNK_SIZE: usize = 8192;

pub(crate) fn hex_reader<R: Read>(algorithm: HashAlgorithm, reader: R) -> std::io::Result<String> {
    match algorithm {
        HashAlgorithm::Sha224 => stream::<Sha224, R>(reader),
        HashAlgorithm::Sha256 => stream::<Sha256, R>(reader),
        HashAlgorithm::Sha384 => stream::<Sha384, R>(reader),
        HashAlgorithm::Sha512 => stream::<Sha512, R>(reader),
        HashAlgorithm::Sha512_224 => stream::<Sha512_224, R>(reader),
        HashAlgorithm::Sha512_256 => stream::<Sha512_256, R>(reader),
    }
}

pub(crate) fn hex_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> String {
    // In-memory hashing should be infallible; keep a single hashing implementation.
    hex_reader(algorithm, Cursor::new(bytes))
        .expect("hashing in-memory bytes via cursor must not fail")
}

fn stream<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0_u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
