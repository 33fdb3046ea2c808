/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! End-to-end scenarios from spec.md §8 (S1-S6), exercised through the
//! public `assemble`/`burn`/`compile` entry points and `MockFileReader` so
//! nothing touches the real filesystem except the one ROM-write test.

use mcutool::file_reader::MockFileReader;
use std::path::Path;

#[test]
fn s1_minimal_halt() {
    let mut reader = MockFileReader::default();
    reader.add_file("input.as", "HLT\n");
    let bytes = mcutool::assemble_file(&reader, Path::new("input.as")).unwrap();
    assert_eq!(bytes, vec![0xFF]);
}

#[test]
fn s2_counted_loop_resolves_forward_and_backward_labels() {
    let mut reader = MockFileReader::default();
    reader.add_file(
        "input.as",
        "  LI A, 0\n\
         :loop\n\
         \x20 INC A\n\
         \x20 LI B, 0x10\n\
         \x20 SUB A, B\n\
         \x20 JCR .done\n\
         \x20 LI A, 0\n\
         .done\n\
         \x20 HLT\n",
    );
    let bytes = mcutool::assemble_file(&reader, Path::new("input.as")).unwrap();
    assert_eq!(bytes.last(), Some(&0xFF));
}

#[test]
fn s3_absolute_jump() {
    let mut reader = MockFileReader::default();
    reader.add_file("input.as", "PJMP :target\nJMP\n:target\nHLT\n");
    let bytes = mcutool::assemble_file(&reader, Path::new("input.as")).unwrap();
    assert_eq!(bytes, vec![0xc0, 0x00, 0x04, 0xc1, 0xff]);
}

#[test]
fn s4_microcode_rom_fetch_prologue_shape() {
    let images = mcutool::burn().unwrap();
    for flags in 0u32..16 {
        let addr = (flags as usize) << 12;
        // MO|IRE (bits 14/15, in the low ROM half) must hold at step 0 for every flag combination.
        assert_eq!(images.rom1[addr] & 0xC000, 0xC000);
    }
}

#[test]
fn s4_burning_writes_two_readable_rom_images() {
    let images = mcutool::burn().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let rom1_path = dir.path().join("rom01.img");
    let mut rom1_file = std::fs::File::create(&rom1_path).unwrap();
    mcutool::raw_image::write_raw_image(&mut rom1_file, &images.rom1).unwrap();

    let text = std::fs::read_to_string(&rom1_path).unwrap();
    let values = mcutool::raw_image::read_raw_image(&text).unwrap();
    assert_eq!(values, images.rom1);
}

#[test]
fn s5_compiler_round_trip_produces_assembleable_output() {
    let mut reader = MockFileReader::default();
    reader.add_file("input.src", "function int main() { return 1 + 2; }");
    let asm = mcutool::compile_file(&reader, Path::new("input.src")).unwrap();

    assert!(asm.starts_with("LI A, 0xff\nSPSL A\nSPSH A\nZERO A\nPJMP :function_main\nJAL\nHLT\n"));
    assert!(asm.contains(":function_main"));
    assert!(asm.contains("ADD A, B"));
    assert!(asm.contains("RET"));

    let bytes = mcutool::assemble(&asm).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn s6_call_convention_saves_and_pops_arguments() {
    let mut reader = MockFileReader::default();
    reader.add_file(
        "input.src",
        "function int add(int x, int y) { return x + y; } \
         function int main() { return add(2, 3); }",
    );
    let asm = mcutool::compile_file(&reader, Path::new("input.src")).unwrap();

    assert!(asm.contains(":function_add"));
    assert!(asm.contains("PJMP :function_add"));
    assert!(asm.contains("JAL"));

    let bytes = mcutool::assemble(&asm).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn unknown_mnemonic_halts_rather_than_emitting_a_placeholder_byte() {
    let mut reader = MockFileReader::default();
    reader.add_file("input.as", "NOPE\n");
    assert!(mcutool::assemble_file(&reader, Path::new("input.as")).is_err());
}

#[test]
fn relative_label_out_of_range_is_rejected() {
    let mut reader = MockFileReader::default();
    let mut source = String::from(":start\n");
    for _ in 0..200 {
        source.push_str("HLT\n");
    }
    source.push_str("JCR .start\n");
    reader.add_file("input.as", &source);
    assert!(mcutool::assemble_file(&reader, Path::new("input.as")).is_err());
}

#[test]
fn missing_source_file_is_an_error() {
    let reader = MockFileReader::default();
    assert!(mcutool::assemble_file(&reader, Path::new("missing.as")).is_err());
}
