use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use retention_core::app::AdvisorBuilder;
use retention_core::config::AppConfig;
use retention_core::domain::{
    CustomerMessage, CustomerRecord, Incentive, InteractionSnapshot, Phone, RuleId,
    SentimentLabel,
};
use retention_core::impls::{KeywordSentimentAnalyzer, LogisticChurnScorer, SqliteCustomerStore};
use retention_core::policy::IncentiveRecommender;

fn record(phone: &str, service_calls: u32, international_plan: bool) -> CustomerRecord {
    CustomerRecord {
        phone: Phone::new(phone).unwrap(),
        state: "OH".to_string(),
        account_length: 107,
        area_code: 415,
        international_plan,
        voicemail_plan: false,
        voicemail_messages: 0,
        day_mins: 161.6,
        day_calls: 123,
        eve_mins: 195.5,
        eve_calls: 103,
        night_mins: 254.4,
        night_calls: 103,
        intl_mins: 13.7,
        intl_calls: 3,
        customer_service_calls: service_calls,
    }
}

fn snapshot(label: &str, confidence: f64, churn: f64) -> InteractionSnapshot {
    InteractionSnapshot {
        day_mins: 120.0,
        customer_service_calls: 0,
        has_international_plan: false,
        churn_probability: churn,
        sentiment_label: SentimentLabel::parse(label),
        sentiment_confidence: confidence,
    }
}

#[test]
fn decision_table_examples() {
    let rec = IncentiveRecommender::default();
    let mut rng = StdRng::seed_from_u64(11);

    let r = rec.recommend(&snapshot("POSITIVE", 0.9, 0.2), &mut rng);
    assert_eq!(r.incentive, Incentive::None);

    let r = rec.recommend(&snapshot("POSITIVE", 0.6, 0.95), &mut rng);
    assert_eq!(r.incentive, Incentive::Credit { dollars: 5 });

    let r = rec.recommend(&snapshot("NEGATIVE", 0.8, 0.9), &mut rng);
    assert_eq!(r.incentive, Incentive::Credit { dollars: 25 });

    let mut s = snapshot("NEUTRAL", 0.9, 0.99);
    s.customer_service_calls = 3;
    let r = rec.recommend(&s, &mut rng);
    assert_eq!(r.incentive, Incentive::FreeInternationalMinutes { minutes: 100 });

    let mut s = snapshot("NEUTRAL", 0.9, 0.99);
    s.customer_service_calls = 1;
    s.has_international_plan = true;
    assert_eq!(rec.recommend(&s, &mut rng).incentive, Incentive::None);
}

#[test]
fn experiment_band_only_yields_the_two_tiers() {
    let rec = IncentiveRecommender::default();
    let s = snapshot("NEGATIVE", 0.75, 0.5);
    let mut rng = StdRng::seed_from_u64(99);

    let mut fifteen = 0u32;
    for _ in 0..4_000 {
        let r = rec.recommend(&s, &mut rng);
        assert_eq!(r.rule, RuleId::NegativeExperiment);
        match r.incentive {
            Incentive::Credit { dollars: 15 } => fifteen += 1,
            Incentive::Credit { dollars: 5 } => {}
            other => panic!("unexpected {other:?}"),
        }
    }
    assert!((1_800..=2_200).contains(&fifteen), "fifteen={fifteen}");
}

#[tokio::test]
async fn sqlite_backed_pipeline_end_to_end() {
    let store = SqliteCustomerStore::open_in_memory().unwrap();
    store.upsert(&record("382-4657", 4, false)).unwrap();
    store.upsert(&record("371-7191", 1, true)).unwrap();

    let config = AppConfig::default();
    let advisor = AdvisorBuilder::new()
        .store(Arc::new(store))
        .churn_scorer(Arc::new(LogisticChurnScorer::new(config.churn_model.clone())))
        .sentiment_analyzer(Arc::new(KeywordSentimentAnalyzer::default()))
        .policy(config.policy.clone())
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let message = CustomerMessage::new("I moved house and need to update my address").unwrap();
    let advice = advisor
        .advise(&Phone::new("382-4657").unwrap(), &message, &mut rng)
        .await
        .unwrap();
    assert_eq!(advice.snapshot.sentiment_label, SentimentLabel::Neutral);
    assert_eq!(advice.recommendation.rule, RuleId::FrequentCaller);
    assert!(advice.snapshot.churn_probability > 0.0 && advice.snapshot.churn_probability < 1.0);

    let entries = advisor.advise_all(&message, &mut rng).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].phone.as_str(), "371-7191");
    assert_eq!(
        entries[0].advice.as_ref().unwrap().recommendation.rule,
        RuleId::Default
    );

    let json = serde_json::to_value(&advice).unwrap();
    assert_eq!(json["recommendation"]["label"], "FREE_INTL_MINUTES_100");
    assert_eq!(json["phone"], "382-4657");
}

#[tokio::test]
async fn hostile_message_text_is_inert() {
    let store = SqliteCustomerStore::open_in_memory().unwrap();
    store.upsert(&record("382-4657", 0, false)).unwrap();
    let advisor = AdvisorBuilder::new()
        .store(Arc::new(store.clone()))
        .churn_scorer(Arc::new(LogisticChurnScorer::default()))
        .sentiment_analyzer(Arc::new(KeywordSentimentAnalyzer::default()))
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let message =
        CustomerMessage::new("terrible'); DROP TABLE customers; --\u{0}").unwrap();
    let advice = advisor
        .advise(&Phone::new("382-4657").unwrap(), &message, &mut rng)
        .await
        .unwrap();
    assert_eq!(advice.snapshot.sentiment_label, SentimentLabel::Negative);

    // table is still there
    assert_eq!(store.phones().unwrap().len(), 1);
}
