//! Fixture builders for unit tests.

use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Minimal class file: `internal_name extends java/lang/Object`, no members.
pub fn class_bytes(internal_name: &str, access_flags: u16) -> Vec<u8> {
    fn utf8(out: &mut Vec<u8>, s: &str) {
        out.push(1);
        out.extend_from_slice(&(s.len() as u16).to_be_bytes());
        out.extend_from_slice(s.as_bytes());
    }

    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFEBABEu32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes()); // minor
    out.extend_from_slice(&52u16.to_be_bytes()); // major, Java 8
    out.extend_from_slice(&5u16.to_be_bytes());
    utf8(&mut out, internal_name);
    out.extend_from_slice(&[7, 0, 1]);
    utf8(&mut out, "java/lang/Object");
    out.extend_from_slice(&[7, 0, 3]);
    out.extend_from_slice(&access_flags.to_be_bytes());
    out.extend_from_slice(&2u16.to_be_bytes()); // this_class
    out.extend_from_slice(&4u16.to_be_bytes()); // super_class
    out.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]); // interfaces, fields, methods, attributes
    out
}

/// Writes `com/acme/Foo.class` style entries under a class directory.
pub fn write_classes(root: &Path, internal_names: &[&str]) {
    for name in internal_names {
        let path = root.join(format!("{name}.class"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, class_bytes(name, 0x0021)).unwrap();
    }
}

/// Writes a JAR holding the given classes plus a manifest.
pub fn write_jar(path: &Path, internal_names: &[&str]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    zip.start_file("META-INF/MANIFEST.MF", options).unwrap();
    zip.write_all(b"Manifest-Version: 1.0\n").unwrap();
    for name in internal_names {
        zip.start_file(format!("{name}.class"), options).unwrap();
        zip.write_all(&class_bytes(name, 0x0021)).unwrap();
    }
    zip.finish().unwrap();
}
