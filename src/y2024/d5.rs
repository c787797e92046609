use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::opt,
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::cmp::Ordering,
};

/* --- Day 5: Print Queue ---

Page ordering rules `a|b` (a must precede b) followed by page update sequences. Part one sums the
middle pages of correctly ordered updates. Part two re-sorts the incorrect updates by the rules
and sums their middle pages instead. */

/// Page numbers are two digits, so a pair of pages indexes a dense bit table.
const PAGE_RANGE: usize = 100_usize;

type RuleSet = BitArr!(for PAGE_RANGE * PAGE_RANGE, in u32);

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<(u8, u8)>,
    updates: Vec<Vec<u8>>,
}

impl Solution {
    fn rule_index(before: u8, after: u8) -> usize {
        before as usize * PAGE_RANGE + after as usize
    }

    fn rule_set(&self) -> RuleSet {
        let mut rule_set: RuleSet = BitArray::ZERO;

        for &(before, after) in &self.rules {
            rule_set.set(Self::rule_index(before, after), true);
        }

        rule_set
    }

    fn is_ordered(rule_set: &RuleSet, update: &[u8]) -> bool {
        update.iter().enumerate().all(|(index, &page)| {
            update[..index]
                .iter()
                .all(|&earlier_page| !rule_set[Self::rule_index(page, earlier_page)])
        })
    }

    fn sorted(rule_set: &RuleSet, update: &[u8]) -> Vec<u8> {
        let mut sorted_update: Vec<u8> = update.to_vec();

        sorted_update.sort_by(|&left, &right| {
            if rule_set[Self::rule_index(left, right)] {
                Ordering::Less
            } else if rule_set[Self::rule_index(right, left)] {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        sorted_update
    }

    fn middle_page(update: &[u8]) -> u32 {
        update[update.len() / 2_usize] as u32
    }

    fn ordered_middle_page_sum(&self) -> u32 {
        let rule_set: RuleSet = self.rule_set();

        self.updates
            .iter()
            .filter(|update| Self::is_ordered(&rule_set, update))
            .map(|update| Self::middle_page(update))
            .sum()
    }

    fn resorted_middle_page_sum(&self) -> u32 {
        let rule_set: RuleSet = self.rule_set();

        self.updates
            .iter()
            .filter(|update| !Self::is_ordered(&rule_set, update))
            .map(|update| Self::middle_page(&Self::sorted(&rule_set, update)))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let (input, rules) = many0(terminated(
            separated_pair(parse_integer::<u8>, tag("|"), parse_integer::<u8>),
            opt(line_ending),
        ))(input)?;
        let (input, _) = opt(line_ending)(input)?;
        let (input, updates) = many0(terminated(
            separated_list1(tag(","), parse_integer::<u8>),
            opt(line_ending),
        ))(input)?;

        Ok((input, Self { rules, updates }))
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.ordered_middle_page_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.resorted_middle_page_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        61,13,29\n\
        97,13,75,29,47\n\
        75,97,47,61,53\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution {
                rules: vec![
                    (47_u8, 53_u8),
                    (97_u8, 13_u8),
                    (97_u8, 61_u8),
                    (97_u8, 47_u8),
                    (75_u8, 29_u8),
                    (61_u8, 13_u8),
                    (75_u8, 53_u8),
                    (29_u8, 13_u8),
                    (97_u8, 29_u8),
                    (53_u8, 29_u8),
                    (61_u8, 53_u8),
                    (97_u8, 53_u8),
                    (61_u8, 29_u8),
                    (47_u8, 13_u8),
                    (75_u8, 47_u8),
                    (97_u8, 75_u8),
                    (47_u8, 61_u8),
                    (75_u8, 61_u8),
                    (47_u8, 29_u8),
                    (75_u8, 13_u8),
                    (53_u8, 13_u8),
                ],
                updates: vec![
                    vec![75_u8, 47_u8, 61_u8, 53_u8, 29_u8],
                    vec![97_u8, 61_u8, 53_u8, 29_u8, 13_u8],
                    vec![75_u8, 29_u8, 13_u8],
                    vec![61_u8, 13_u8, 29_u8],
                    vec![97_u8, 13_u8, 75_u8, 29_u8, 47_u8],
                    vec![75_u8, 97_u8, 47_u8, 61_u8, 53_u8],
                ],
            }]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_is_ordered() {
        for (index, is_ordered_values) in [vec![true, true, true, false, false, false]]
            .into_iter()
            .enumerate()
        {
            let solution: &Solution = solution(index);
            let rule_set: RuleSet = solution.rule_set();

            assert_eq!(
                solution
                    .updates
                    .iter()
                    .map(|update| Solution::is_ordered(&rule_set, update))
                    .collect::<Vec<bool>>(),
                is_ordered_values
            );
        }
    }

    #[test]
    fn test_sorted() {
        let solution: &Solution = solution(0_usize);
        let rule_set: RuleSet = solution.rule_set();

        for (update_index, sorted_update) in [
            vec![61_u8, 29_u8, 13_u8],
            vec![97_u8, 75_u8, 47_u8, 29_u8, 13_u8],
            vec![97_u8, 75_u8, 47_u8, 61_u8, 53_u8],
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(
                Solution::sorted(&rule_set, &solution.updates[update_index + 3_usize]),
                sorted_update
            );
        }
    }

    #[test]
    fn test_ordered_middle_page_sum() {
        for (index, ordered_middle_page_sum) in [143_u32].into_iter().enumerate() {
            assert_eq!(
                solution(index).ordered_middle_page_sum(),
                ordered_middle_page_sum
            );
        }
    }

    #[test]
    fn test_resorted_middle_page_sum() {
        for (index, resorted_middle_page_sum) in [123_u32].into_iter().enumerate() {
            assert_eq!(
                solution(index).resorted_middle_page_sum(),
                resorted_middle_page_sum
            );
        }
    }
}
