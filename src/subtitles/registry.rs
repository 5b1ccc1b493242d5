use super::reader::SubtitleReaderFactory;

/// Order `formats` for trial against `filename`.
///
/// Formats whose extension filter accepts the filename come first, followed by
/// all others. Declared order is kept within both groups and no format is ever
/// left out, so the extension only decides priority.
pub fn rank<'f, F: SubtitleReaderFactory>(filename: &str, formats: &'f [F]) -> Vec<&'f F> {
    let (mut likely, others): (Vec<&F>, Vec<&F>) = formats
        .iter()
        .partition(|format| format.accepts(filename));
    likely.extend(others);
    likely
}

#[cfg(test)]
mod tests {
    use super::rank;
    use crate::subtitles::SubtitleFormat;
    use proptest::prelude::*;

    fn ranked(filename: &str) -> Vec<SubtitleFormat> {
        rank(filename, SubtitleFormat::ALL).into_iter().copied().collect()
    }

    #[test]
    fn test_matching_extension_goes_first() {
        assert_eq!(ranked("movie.srt"), SubtitleFormat::ALL.to_vec());
        assert_eq!(
            ranked("movie.ass"),
            vec![
                SubtitleFormat::SubStationAlpha,
                SubtitleFormat::SubRip,
                SubtitleFormat::MicroDvd,
                SubtitleFormat::SubViewer,
                SubtitleFormat::WebVtt,
            ]
        );
    }

    #[test]
    fn test_several_matches_keep_declared_order() {
        assert_eq!(
            ranked("movie.sub"),
            vec![
                SubtitleFormat::MicroDvd,
                SubtitleFormat::SubViewer,
                SubtitleFormat::SubRip,
                SubtitleFormat::SubStationAlpha,
                SubtitleFormat::WebVtt,
            ]
        );
    }

    #[test]
    fn test_no_match_falls_back_to_declared_order() {
        assert_eq!(ranked("movie.mkv"), SubtitleFormat::ALL.to_vec());
        assert_eq!(ranked(""), SubtitleFormat::ALL.to_vec());
    }

    proptest! {
        #[test]
        fn prop_rank_is_total_and_stable(stem in "[a-zA-Z0-9 _.-]{0,16}", ext in "(srt|SRT|sub|txt|ssa|ass|vtt|mkv|bak)") {
            let filename = format!("{}.{}", stem, ext);
            let order = ranked(&filename);

            prop_assert_eq!(order.len(), SubtitleFormat::ALL.len());
            for format in SubtitleFormat::ALL {
                prop_assert_eq!(order.iter().filter(|f| *f == format).count(), 1);
            }

            let split = order.iter().take_while(|f| f.accepts(&filename)).count();
            prop_assert!(order[split..].iter().all(|f| !f.accepts(&filename)));

            let position = |f: &SubtitleFormat| SubtitleFormat::ALL.iter().position(|g| g == f).unwrap();
            prop_assert!(order[..split].windows(2).all(|w| position(&w[0]) < position(&w[1])));
            prop_assert!(order[split..].windows(2).all(|w| position(&w[0]) < position(&w[1])));

            prop_assert_eq!(order, ranked(&filename));
        }
    }
}
