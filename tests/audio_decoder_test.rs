use voxform::application::ports::TranscriptionError;
use voxform::infrastructure::audio::audio_decoder::decode_audio_to_pcm;

fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * block_align as u32;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

#[test]
fn given_16khz_mono_wav_when_decoding_then_sample_count_is_preserved() {
    let wav = build_wav(16_000, 1, &vec![100i16; 1600]);

    let pcm = decode_audio_to_pcm(&wav, Some("wav")).unwrap();

    assert_eq!(pcm.len(), 1600);
}

#[test]
fn given_44khz_wav_when_decoding_then_output_is_resampled_to_16khz() {
    // 0.1s at 44.1kHz should come out near 1600 samples at 16kHz.
    let wav = build_wav(44_100, 1, &vec![100i16; 4410]);

    let pcm = decode_audio_to_pcm(&wav, Some("wav")).unwrap();

    assert!(!pcm.is_empty());
    assert!(
        pcm.len() <= 1600,
        "expected at most 1600 samples, got {}",
        pcm.len()
    );
    assert!(
        pcm.len() > 1200,
        "expected roughly 1600 samples, got {}",
        pcm.len()
    );
}

#[test]
fn given_stereo_wav_when_decoding_then_output_is_downmixed_to_mono() {
    // 800 interleaved frames of two channels.
    let samples: Vec<i16> = (0..1600).map(|i| if i % 2 == 0 { 1000 } else { -1000 }).collect();
    let wav = build_wav(16_000, 2, &samples);

    let pcm = decode_audio_to_pcm(&wav, Some("wav")).unwrap();

    assert_eq!(pcm.len(), 800);
    // Opposite-phase channels cancel out in the downmix.
    assert!(pcm.iter().all(|s| s.abs() < 0.01));
}

#[test]
fn given_no_extension_hint_when_decoding_wav_then_probe_still_detects_format() {
    let wav = build_wav(16_000, 1, &vec![100i16; 1600]);

    let pcm = decode_audio_to_pcm(&wav, None).unwrap();

    assert_eq!(pcm.len(), 1600);
}

#[test]
fn given_garbage_bytes_when_decoding_then_decoding_error() {
    let garbage = vec![0xFFu8; 256];

    let result = decode_audio_to_pcm(&garbage, Some("wav"));

    assert!(matches!(result, Err(TranscriptionError::DecodingFailed(_))));
}

#[test]
fn given_empty_input_when_decoding_then_decoding_error() {
    let result = decode_audio_to_pcm(&[], None);

    assert!(matches!(result, Err(TranscriptionError::DecodingFailed(_))));
}
