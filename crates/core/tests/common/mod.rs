#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub fn class_bytes(internal_name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE, 0, 0, 0, 52, 0, 5]);
    for (i, name) in [internal_name, "java/lang/Object"].iter().enumerate() {
        out.push(1);
        out.extend_from_slice(&(name.len() as u16).to_be_bytes());
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&[7, 0, (i * 2 + 1) as u8]);
    }
    // public super, this=#2, super=#4, no interfaces/fields/methods/attributes
    out.extend_from_slice(&[0x00, 0x21, 0, 2, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0]);
    out
}

pub fn write_classes(root: &Path, internal_names: &[&str]) {
    for name in internal_names {
        let path = root.join(format!("{name}.class"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, class_bytes(name)).unwrap();
    }
}

pub fn write_jar(path: &Path, internal_names: &[&str]) {
    let mut zip = ZipWriter::new(fs::File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for name in internal_names {
        zip.start_file(format!("{name}.class"), options).unwrap();
        zip.write_all(&class_bytes(name)).unwrap();
    }
    zip.finish().unwrap();
}
