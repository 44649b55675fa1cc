//! End-to-end behaviour of the machine, driven only through the public API.

use emu8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, STACK_DEPTH};
use emu8::state::State;
use emu8::{Chip8, Chip8Error, Config, Sequence, Status};

fn chip8_with_rom(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_rng(Box::new(Sequence::new(vec![0x42])));
    chip8.load_rom(rom).unwrap();
    chip8
}

#[test]
fn test_add_program() {
    // V0 = 5; V1 = 3; V0 += V1
    let mut chip8 = chip8_with_rom(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14]);
    for _ in 0..3 {
        assert_eq!(chip8.step(), Ok(Status::Running));
    }
    assert_eq!(chip8.state().register(0x0), 8);
    assert_eq!(chip8.state().register(0xF), 0);
    assert_eq!(chip8.state().pc(), 0x200 + 6);
}

#[test]
fn test_add_program_with_carry() {
    // V0 = FF; V1 = 1; V0 += V1
    let mut chip8 = chip8_with_rom(&[0x60, 0xFF, 0x61, 0x01, 0x80, 0x14]);
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.state().register(0x0), 0x00);
    assert_eq!(chip8.state().register(0xF), 1);
}

#[test]
fn test_bcd_program() {
    // V5 = 157; I = 0x300; BCD V5; V0..V2 = mem[I..]
    let mut chip8 = chip8_with_rom(&[0x65, 157, 0xA3, 0x00, 0xF5, 0x33, 0xF2, 0x65]);
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.state().read_block(0x300, 3).unwrap(), [1, 5, 7]);
    assert_eq!(&chip8.state().registers()[..3], &[1, 5, 7]);
}

#[test]
fn test_cls_clears_everything() {
    // I = font 8; draw it all over the screen, then clear
    let mut rom = vec![0xA0, 0x28];
    for (x, y) in [(0u8, 0u8), (20, 10), (60, 28)].iter() {
        rom.extend_from_slice(&[0x60, *x, 0x61, *y, 0xD0, 0x15]);
    }
    rom.extend_from_slice(&[0x00, 0xE0]);
    let mut chip8 = chip8_with_rom(&rom);
    for _ in 0..10 {
        chip8.step().unwrap();
    }
    assert!(chip8.frame_buffer().iter().flatten().any(|&p| p));
    chip8.step().unwrap();
    assert!(chip8.frame_buffer().iter().flatten().all(|&p| !p));
}

#[test]
fn test_drawing_twice_restores_display() {
    // I = font F; V0 = 62; V1 = 30; draw; draw
    let mut chip8 = chip8_with_rom(&[0xA0, 0x4B, 0x60, 62, 0x61, 30, 0xD0, 0x15, 0xD0, 0x15]);
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    let before = *chip8.frame_buffer();
    chip8.step().unwrap();
    assert_ne!(chip8.frame_buffer(), &before);
    assert_eq!(chip8.state().register(0xF), 0);
    chip8.step().unwrap();
    assert_eq!(chip8.frame_buffer(), &before);
    assert_eq!(chip8.state().register(0xF), 1);
}

#[test]
fn test_sprite_wraps_around_both_edges() {
    let mut state = State::new();
    let erased = state.draw_pixel(DISPLAY_WIDTH, DISPLAY_HEIGHT, true);
    assert!(!erased);
    assert!(state.pixel(0, 0));
}

#[test]
fn test_stack_fills_to_capacity() {
    let mut state = State::new();
    for n in 0..STACK_DEPTH {
        let depth = state.stack_depth();
        state.push(0x300).unwrap();
        assert_eq!(state.pop(), Ok(0x300));
        assert_eq!(state.stack_depth(), depth);
        state.push(0x200 + n as u16).unwrap();
    }
    assert_eq!(state.stack_depth(), STACK_DEPTH);
    assert_eq!(
        state.push(0x400),
        Err(Chip8Error::StackOverflow { depth: STACK_DEPTH })
    );
}

#[test]
fn test_recursion_overflows_stack() {
    // 0x200: call 0x200
    let mut chip8 = chip8_with_rom(&[0x22, 0x00]);
    for _ in 0..STACK_DEPTH {
        chip8.step().unwrap();
    }
    assert_eq!(
        chip8.step(),
        Err(Chip8Error::StackOverflow { depth: STACK_DEPTH })
    );
}

#[test]
fn test_configured_stack_depth_allows_deeper_recursion() {
    let config = Config { stack_depth: 16 };
    let mut chip8 = Chip8::with_config(config, Box::new(Sequence::new(vec![0x0]))).unwrap();
    chip8.load_rom(&[0x22, 0x00]).unwrap();
    for _ in 0..16 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.step(), Err(Chip8Error::StackOverflow { depth: 16 }));
}

#[test]
fn test_return_with_empty_stack() {
    let mut chip8 = chip8_with_rom(&[0x00, 0xEE]);
    assert_eq!(chip8.step(), Err(Chip8Error::StackUnderflow));
}

#[test]
fn test_delay_timer_decays() {
    // V0 = 5; DT = V0
    let mut chip8 = chip8_with_rom(&[0x60, 0x05, 0xF0, 0x15]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.state().delay_timer(), 5);
    for _ in 0..5 {
        chip8.tick_timers();
    }
    assert_eq!(chip8.state().delay_timer(), 0);
    chip8.tick_timers();
    assert_eq!(chip8.state().delay_timer(), 0);
}

#[test]
fn test_wait_for_key() {
    // V2 = key; V3 = 1
    let mut chip8 = chip8_with_rom(&[0xF2, 0x0A, 0x63, 0x01]);
    assert_eq!(chip8.step(), Ok(Status::WaitingForKey { register: 0x2 }));
    let pc = chip8.state().pc();

    for _ in 0..5 {
        assert_eq!(chip8.step(), Ok(Status::WaitingForKey { register: 0x2 }));
        assert_eq!(chip8.state().pc(), pc);
        chip8.tick_timers();
    }

    let mut keys = [false; 16];
    keys[0x9] = true;
    chip8.set_keys(keys);
    assert_eq!(chip8.step(), Ok(Status::Running));
    assert_eq!(chip8.state().register(0x2), 0x9);
    assert_eq!(chip8.state().pc(), pc);

    chip8.step().unwrap();
    assert_eq!(chip8.state().pc(), pc + 2);
    assert_eq!(chip8.state().register(0x3), 0x1);
}

#[test]
fn test_rom_too_large() {
    let mut chip8 = Chip8::new();
    assert_eq!(
        chip8.load_rom(&vec![0; 4096 - 0x200 + 1]),
        Err(Chip8Error::RomTooLarge {
            size: 3585,
            max: 3584
        })
    );
}

#[test]
fn test_store_past_end_of_memory() {
    // I = FFF; store V0..V1
    let mut chip8 = chip8_with_rom(&[0xAF, 0xFF, 0xF1, 0x55]);
    chip8.step().unwrap();
    assert_eq!(
        chip8.step(),
        Err(Chip8Error::OutOfBounds { address: 0x1000 })
    );
}
