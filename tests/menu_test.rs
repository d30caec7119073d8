use autolot::Menu;
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(script: &str, data_file: &str) -> (String, usize) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut output: Vec<u8> = Vec::new();
    let mut menu = Menu::new(input, &mut output, data_file);
    menu.run().unwrap();
    let len = menu.collection().len();
    drop(menu);
    (String::from_utf8(output).unwrap(), len)
}

#[test]
fn test_add_display_and_total() {
    let script = "1\nHonda\n15000\n2\nYamaha\n8000.5\n3\n4\n8\n";
    let (output, len) = run_script(script, "vehicles.txt");

    assert_eq!(len, 2);
    assert!(output.contains("Car: Honda, Price: $15000"));
    assert!(output.contains("Motorcycle: Yamaha, Price: $8000.5"));
    assert!(output.contains("Total Price: $23000.5"));
}

#[test]
fn test_display_by_index_and_bad_index() {
    let script = "2\nYamaha\n8000.5\n5\n0\n5\n7\n5\n-1\n8\n";
    let (output, _) = run_script(script, "vehicles.txt");

    assert!(output.contains("Motorcycle: Yamaha, Price: $8000.5"));
    assert_eq!(output.matches("Invalid index!").count(), 2);
}

#[test]
fn test_invalid_choice_keeps_looping() {
    let script = "9\nbogus\n8\n";
    let (output, len) = run_script(script, "vehicles.txt");

    assert_eq!(len, 0);
    assert_eq!(
        output.matches("Invalid choice! Please try again.").count(),
        2
    );
}

#[test]
fn test_invalid_price_does_not_add() {
    let script = "1\nHonda\ncheap\n8\n";
    let (output, len) = run_script(script, "vehicles.txt");

    assert_eq!(len, 0);
    assert!(output.contains("Invalid price! Vehicle not added."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (_, len) = run_script("4\n", "vehicles.txt");
    assert_eq!(len, 0);
}

#[test]
fn test_save_then_load_through_menu() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lot.txt").to_str().unwrap().to_string();

    let save_script = format!("1\nHonda\n15000\n2\nYamaha\n8000.5\n6\n{}\n8\n", path);
    let (save_output, _) = run_script(&save_script, "vehicles.txt");
    assert!(save_output.contains(&format!("Saved 2 vehicles to {}", path)));

    let load_script = format!("7\n{}\n3\n8\n", path);
    let (load_output, len) = run_script(&load_script, "vehicles.txt");

    assert_eq!(len, 2);
    assert!(load_output.contains(&format!("Loaded 2 vehicles from {}", path)));
    assert!(load_output.contains("Car: Honda, Price: $15000"));
    assert!(load_output.contains("Motorcycle: Yamaha, Price: $8000.5"));
}

#[test]
fn test_blank_filename_uses_default_data_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("default.txt").to_str().unwrap().to_string();

    let script = "1\nOpel\n9000\n6\n\n8\n";
    let (output, _) = run_script(script, &path);

    assert!(output.contains(&format!("Saved 1 vehicles to {}", path)));
    assert!(dir.path().join("default.txt").exists());
}

#[test]
fn test_save_error_is_reported_and_loop_continues() {
    let dir = TempDir::new().unwrap();
    // A directory is not a writable file target.
    let bad_path = dir.path().to_str().unwrap().to_string();

    let script = format!("1\nHonda\n15000\n6\n{}\n4\n8\n", bad_path);
    let (output, len) = run_script(&script, "vehicles.txt");

    assert_eq!(len, 1);
    assert!(output.contains("Error: Failed to open file:"));
    // The loop keeps serving requests after the failure.
    assert!(output.contains("Total Price: $15000"));
}
