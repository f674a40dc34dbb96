use std::{alloc::Layout, env, io::Read};

use libc::sbrk;
use rvector::{SimpleVector, VectorError, print_alloc, reserve, svec};

/// Waits until the user presses ENTER, but only when `--step` was passed.
/// Useful when you want to inspect memory state with tools like `pmap`, `htop`
/// or `gdb` between growth events.
fn block_until_enter_pressed(step: bool) {
  if !step {
    return;
  }

  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints the current program break using `sbrk(0)`.
unsafe fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { sbrk(0) },
  );
}

fn print_state<T: std::fmt::Debug>(
  label: &str,
  v: &SimpleVector<T>,
) {
  println!(
    "[{}] size = {}, capacity = {}, buffer = {:?}, elements = {:?}",
    label,
    v.len(),
    v.capacity(),
    v.as_ptr(),
    v
  );
}

/// Element type that can be moved but never copied.
#[derive(Debug, Default)]
struct Token(usize);

fn main() -> Result<(), VectorError> {
  let step = env::args().any(|arg| arg == "--step");

  unsafe { print_program_break("start") };
  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 1) Push one element at a time and watch capacity double.
  // --------------------------------------------------------------------
  println!("\n[1] push_back 0..9");
  let mut v = SimpleVector::new();
  let mut last_capacity = v.capacity();

  for i in 0..9 {
    v.push_back(i);

    if v.capacity() != last_capacity {
      println!(
        "[1] growth event: capacity {} -> {}, buffer now at {:?}",
        last_capacity,
        v.capacity(),
        v.as_ptr()
      );
      last_capacity = v.capacity();
    }
  }

  print_state("1", &v);
  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 2) Reserve up front, then overflow the reservation.
  // --------------------------------------------------------------------
  println!("\n[2] reserve(5), push 10 values, reserve(100)");
  let mut reserved = SimpleVector::<i32>::from(reserve(5));
  print_state("2", &reserved);

  for i in 0..10 {
    reserved.push_back(i);
  }
  print_state("2", &reserved);

  reserved.reserve(100);
  print_state("2", &reserved);

  unsafe {
    print_alloc(
      Layout::array::<i32>(reserved.capacity()).unwrap(),
      reserved.as_ptr() as *mut u8,
    )
  };

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 3) Insert and erase shift the tail.
  // --------------------------------------------------------------------
  println!("\n[3] insert / erase");
  let mut shifted = svec![0, 1, 2];

  let position = shifted.insert(1, 100);
  println!("[3] inserted 100 at {}", position);
  print_state("3", &shifted);

  let position = shifted.erase(0);
  println!("[3] erased index 0, position now holds {}", shifted[position]);
  print_state("3", &shifted);

  match shifted.at(10) {
    Ok(value) => println!("[3] at(10) = {}", value),
    Err(error) => println!("[3] at(10) failed: {}", error),
  }

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 4) Move a vector of move-only tokens.
  // --------------------------------------------------------------------
  println!("\n[4] move-only elements");
  let mut source = SimpleVector::new();
  for i in 0..5 {
    source.push_back(Token(i));
  }

  let buffer_before = source.as_ptr();
  let target = source.take();

  println!(
    "[4] buffer moved from {:?} to {:?} without copying",
    buffer_before,
    target.as_ptr()
  );
  print_state("4 source", &source);
  print_state("4 target", &target);

  let total: usize = target.iter().map(|token| token.0).sum();
  println!("[4] sum of moved tokens = {}", total);

  // --------------------------------------------------------------------
  // 5) Comparisons.
  // --------------------------------------------------------------------
  println!("\n[5] comparisons");
  println!("[5] [1, 2, 3] < [1, 2, 4] = {}", svec![1, 2, 3] < svec![1, 2, 4]);
  println!("[5] [1, 2] < [1, 2, 3] = {}", svec![1, 2] < svec![1, 2, 3]);
  println!("[5] [1, 2, 3] == [1, 2, 3] = {}", svec![1, 2, 3] == svec![1, 2, 3]);

  unsafe { print_program_break("end") };
  println!("\n[6] End of example. Every buffer is released as its vector goes out of scope.");

  let last = reserved.at(9)?;
  println!("[6] last reserved element = {}", last);

  Ok(())
}
