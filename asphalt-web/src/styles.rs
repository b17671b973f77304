//! Presentational stylesheet injected alongside the estimate form.

pub const STYLESHEET: &str = r#"
.asphalt-calculator {
    max-width: 500px;
    margin: 20px auto;
    padding: 30px;
    background: #f8f9fa;
    border-radius: 10px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.asphalt-calculator h3 {
    text-align: center;
    margin-bottom: 25px;
    color: #333;
    font-size: 24px;
}
.asphalt-calculator .form-group {
    margin-bottom: 20px;
}
.asphalt-calculator .form-group label {
    display: block;
    margin-bottom: 8px;
    font-weight: 600;
    color: #555;
}
.asphalt-calculator .form-group input {
    width: 100%;
    padding: 12px;
    border: 2px solid #ddd;
    border-radius: 5px;
    font-size: 16px;
    box-sizing: border-box;
}
.asphalt-calculator .form-group input:focus {
    outline: none;
    border-color: #007bff;
}
.asphalt-calculator .unit {
    color: #666;
    font-size: 14px;
    margin-left: 10px;
}
#calculate-btn {
    width: 100%;
    padding: 15px;
    background: #007bff;
    color: #fff;
    border: none;
    border-radius: 5px;
    font-size: 18px;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.3s;
}
#calculate-btn:hover {
    background: #0056b3;
}
.asphalt-calculator .results {
    margin-top: 25px;
    padding: 20px;
    background: #fff;
    border-radius: 8px;
    border: 2px solid #28a745;
}
.asphalt-calculator .results h4 {
    text-align: center;
    margin-bottom: 15px;
    color: #333;
}
.asphalt-calculator .price-range {
    text-align: center;
    margin-bottom: 15px;
}
.asphalt-calculator .price-range span {
    font-size: 24px;
    font-weight: bold;
    color: #28a745;
}
.asphalt-calculator .price-range .and {
    margin: 0 15px;
    color: #666;
    font-weight: normal;
}
.asphalt-calculator .disclaimer {
    text-align: center;
    font-size: 14px;
    color: #666;
    margin: 0;
}
.asphalt-calculator .error {
    color: #dc3545;
    font-size: 14px;
    margin-top: 5px;
}
"#;
